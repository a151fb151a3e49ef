/// Builds a [`Record::Map`](crate::Record::Map), keeping the literal order.
#[macro_export]
macro_rules! map {
    () => {
        $crate::Record::Map($crate::Map::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert(::std::string::ToString::to_string(&$key), $crate::Record::from($value));
        )+
        $crate::Record::Map(map)
    }};
}

/// Builds a [`Record::Object`](crate::Record::Object).
#[macro_export]
macro_rules! object {
    () => {
        $crate::Record::Object($crate::Object::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::Object::new();
        $(
            object.insert(::std::string::ToString::to_string(&$key), $crate::Record::from($value));
        )+
        $crate::Record::Object(object)
    }};
}

/// Builds a [`Record::List`](crate::Record::List).
#[macro_export]
macro_rules! list {
    ($($value:expr),* $(,)?) => {
        $crate::Record::List(::std::vec![$($crate::Record::from($value)),*])
    };
}
