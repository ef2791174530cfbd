//! Minimal abstraction for the surface step labels are written to. Allows the
//! executor to plug into a terminal, a log widget, a file, or a test double.

/// Contract to append lines to, and clear, a visible text surface.
pub trait DisplaySink {
    type Error: core::fmt::Debug;
    /// Append `text` as a new line.
    fn write<'a>(
        &'a mut self,
        text: &'a str,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a;
    /// Empty the surface.
    fn clear<'a>(&'a mut self) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a;
}

impl<S: DisplaySink> DisplaySink for &mut S {
    type Error = S::Error;

    async fn write<'a>(&'a mut self, text: &'a str) -> Result<(), Self::Error> {
        (**self).write(text).await
    }

    async fn clear<'a>(&'a mut self) -> Result<(), Self::Error> {
        (**self).clear().await
    }
}
