/* ----------------------------------- Coax ---------------------------------- */

/// Compose a constructor with a transform applied to its input first.
///
/// The returned closure is a drop-in replacement for `ctor` that coerces its
/// argument on the way in.
pub fn coax<In, Mid, Out>(
    ctor: impl Fn(Mid) -> Out, transform: impl Fn(In) -> Mid,
) -> impl Fn(In) -> Out {
    move |input| ctor(transform(input))
}
