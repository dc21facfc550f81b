/// Builds a [`Value`](crate::Value) from a literal description.
///
/// Braces build maps, brackets build lists, and anything else goes through
/// `Value::from`, so integers and booleans land as their string form just
/// as they would through [`Document::insert`](crate::Document::insert).
///
/// ```rust
/// use mapfile::mapfile;
///
/// let profile = mapfile!({
///     "name": "Avery",
///     "level": 3,
///     "scores": [10, 20, 30]
/// });
///
/// let doc = profile.into_map().unwrap();
/// assert_eq!(doc.get_integer("level").unwrap(), 3);
/// assert_eq!(doc.get_list_of::<i64>("scores").unwrap(), vec![10, 20, 30]);
/// ```
#[macro_export]
macro_rules! mapfile {
    // Empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // List
    ([ $($element:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::mapfile!($element)),*])
    };

    // Empty map
    ({}) => {
        $crate::Value::Map($crate::Document::new())
    };

    // Map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut document = $crate::Document::new();
        $(
            document.insert($key, $crate::mapfile!($value));
        )*
        $crate::Value::Map(document)
    }};

    // Any expression with an Into<Value> conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
