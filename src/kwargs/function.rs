//! Callables with a declared signature

use super::signature::{Args, BoundArgs, Signature};
use crate::error::Result;

/// Something that can be called with [`Args`] and reports the signature it
/// accepts. Plain functions and both wrappers implement it, so wrappers nest.
pub trait Callable {
    type Output;

    fn signature(&self) -> &Signature;

    fn call(&self, args: Args) -> Result<Self::Output>;
}

/// A closure paired with the parameter list it was declared with.
pub struct Function<F> {
    signature: Signature,
    func: F,
}

impl<F, R> Function<F>
where
    F: Fn(BoundArgs) -> R,
{
    pub fn new(signature: Signature, func: F) -> Self {
        Self { signature, func }
    }
}

impl<F, R> Callable for Function<F>
where
    F: Fn(BoundArgs) -> R,
{
    type Output = R;

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: Args) -> Result<R> {
        let bound = self.signature.bind(args)?;
        Ok((self.func)(bound))
    }
}
