#[macro_export]
macro_rules! tson {
    // Handle null
    (null) => {
        $crate::TsonValue::Null
    };

    // Handle true
    (true) => {
        $crate::TsonValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::TsonValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::TsonValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::TsonValue::Array(vec![$($crate::tson!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::TsonValue::Object($crate::TsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::TsonMap::new();
        $(
            object.insert($key.to_string(), $crate::tson!($value));
        )*
        $crate::TsonValue::Object(object)
    }};

    // Fallback for any expression with a From conversion,
    // including the exotic kinds
    ($other:expr) => {
        $crate::TsonValue::from($other)
    };
}
