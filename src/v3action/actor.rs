use crate::ccv3::CloudControllerClient;

/// Adapts cloud controller calls into the application's call contract.
///
/// The actor holds no mutable state. It is safe to share between tasks whenever its
/// client is, and cloning it clones the client handle.
#[derive(Clone)]
pub struct Actor<C> {
    client: C,
}

impl<C: CloudControllerClient> Actor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The client every operation delegates to.
    pub fn client(&self) -> &C {
        &self.client
    }
}
