use postbox_models::message::MessageId;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MessageIdService: Send + Sync + 'static {
    /// Mints a fresh message id.
    ///
    /// Every call returns a value distinct from all earlier calls within the
    /// same process run, including calls made concurrently.
    fn generate(&self) -> MessageId;
}

#[cfg(feature = "mock")]
impl MockMessageIdService {
    pub fn with_generate(mut self, id: MessageId) -> Self {
        self.expect_generate().once().return_once(move || id);
        self
    }
}
