/// Builds a [`Value`](crate::Value) from a literal-like expression.
///
/// `nothing` produces [`Value::Nothing`](crate::Value::Nothing), `[...]`
/// produces an array (nested arrays allowed, trailing comma accepted), and
/// anything else goes through `Value::from`. Negative numbers inside an array
/// need parentheses: `omfl!([(-1), 2])`.
///
/// # Examples
///
/// ```rust
/// use omfl::{omfl, Value};
///
/// assert_eq!(omfl!(nothing), Value::Nothing);
/// assert_eq!(omfl!(42), Value::Int(42));
/// assert_eq!(omfl!(-1.5), Value::Float(-1.5));
///
/// let nested = omfl!([1, "two", [true, nothing]]);
/// assert_eq!(nested[1].as_str(), Some("two"));
/// assert!(nested[2][1].is_nothing());
/// ```
#[macro_export]
macro_rules! omfl {
    (nothing) => {
        $crate::Value::Nothing
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::from(::std::vec::Vec::<$crate::Value>::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::from(::std::vec![$($crate::omfl!($elem)),+])
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
