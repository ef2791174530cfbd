//! Asynchronous timer abstraction: the executor's only suspension primitive.

/// Timer trait abstraction; one instance per running sequence.
pub trait SequenceTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a;
}

impl<T: SequenceTimer> SequenceTimer for &mut T {
    async fn delay_ms<'a>(&'a mut self, millis: u32) {
        (**self).delay_ms(millis).await
    }
}

/// [`SequenceTimer`] backed by `embassy_time::Timer`.
///
/// The final binary must link an embassy time driver.
#[cfg(feature = "embassy-timer")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

#[cfg(feature = "embassy-timer")]
impl SequenceTimer for EmbassyTimer {
    async fn delay_ms<'a>(&'a mut self, millis: u32) {
        embassy_time::Timer::after_millis(millis as u64).await
    }
}
