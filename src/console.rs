//! Log sink.

use crate::cont::Cont;

/// Emit `message` as an info event.
///
/// Nothing happens until the continuation is started.
pub fn log(message: impl Into<String>) -> Cont<()> {
    let message = message.into();
    Cont::new(move |cb| {
        tracing::info!("{}", message);
        cb.call(())
    })
}
