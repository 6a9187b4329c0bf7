/// Checks that a numerical value lies in the interval `[a,b]`, or `[a,b)` when
/// the trailing `open` marker is given, and returns early from the enclosing
/// function with a [`ConfigError`](crate::error::ConfigError) if not
///
/// ### Example
/// ```ignore
/// check_interval!(config.alpha, 0.0, 1.0);
/// check_interval!(config.gamma, 0.0, 1.0, open);
/// ```
/// For `alpha = 2.0` this produces the message "Invalid value for `alpha`: 2. Must be in the interval [0, 1]."
macro_rules! check_interval {
    ($owner:ident . $field:ident, $a:expr, $b:expr) => {
        if !($owner.$field >= $a && $owner.$field <= $b) {
            return Err($crate::error::ConfigError::OutOfRange {
                name: stringify!($field),
                value: $owner.$field,
                interval: format!("[{}, {}]", $a, $b),
            });
        }
    };
    ($owner:ident . $field:ident, $a:expr, $b:expr, open) => {
        if !($owner.$field >= $a && $owner.$field < $b) {
            return Err($crate::error::ConfigError::OutOfRange {
                name: stringify!($field),
                value: $owner.$field,
                interval: format!("[{}, {})", $a, $b),
            });
        }
    };
}

pub(crate) use check_interval;
