#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// A chunk that must match `$pat`.
#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Pattern::Chunk($crate::regex!($pat))
    };
}

/// A chunk that may match `$pat`; when it does not, nothing is consumed.
#[macro_export]
macro_rules! opt {
    ($pat:literal) => {
        $crate::Pattern::Optional($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: [ $($pat:expr),* $(,)? ]
        $(, shape: $shape:expr)?
        , prod: |$groups_expr:ident : &[$groups_ty:ty]| -> $ret_ty:ty $body_expr:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            pattern: vec![ $($pat),* ],
            production: Box::new(move |$groups_expr: &[$groups_ty]| {
                let result: $ret_ty = $body_expr;
                result
            }),
            shape: { $crate::engine::ChunkShape::empty() $(| $shape)? },
        }
    }};
}
