/// Declare a union inline, object-literal style:
///
/// ```text
/// let decl = declare! {
///     just: [FieldTy::Any],
///     nothing: [],
/// };
/// ```
///
/// Field entries are anything convertible to [`crate::FieldTy`]: a
/// `PrimKind`, a `TypeTag`, a `&Union` for nesting, or a `FieldTy` itself.
#[macro_export]
macro_rules! declare {
    { $($tag:ident : [ $($ty:expr),* $(,)? ]),* $(,)? } => {
        $crate::Declaration::new()
            $( .variant(stringify!($tag), vec![ $($crate::FieldTy::from($ty)),* ]) )*
    };
}
