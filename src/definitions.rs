//! Trait definitions shared by the pixel blending code.

/// A type to which we can clamp a value of type T.
/// Implementations are not required to handle NaNs gracefully.
pub trait Clamp<T> {
    /// Clamp `x` to a valid value for this type.
    fn clamp(x: T) -> Self;
}

/// Creates an implementation of Clamp<From> for type To.
macro_rules! implement_clamp {
    ($from:ty, $to:ty) => {
        impl Clamp<$from> for $to {
            fn clamp(x: $from) -> $to {
                if x < <$to>::MAX as $from {
                    if x > <$to>::MIN as $from {
                        x as $to
                    } else {
                        <$to>::MIN
                    }
                } else {
                    <$to>::MAX
                }
            }
        }
    };
}

implement_clamp!(f32, u8);
