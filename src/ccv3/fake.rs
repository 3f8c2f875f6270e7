//! # Fake Client & Testing Guide
//!
//! [`FakeCloudControllerClient`] implements [`CloudControllerClient`] entirely in memory.
//! It answers each call from a queue of stubbed responses and records the arguments of
//! every call, so tests can check both what the code under test *returned* and what it
//! *asked for*.
//!
//! ## When to use the Fake vs the Local Controller
//!
//! | Feature | FakeCloudControllerClient | LocalControllerClient |
//! |---------|---------------------------|-----------------------|
//! | **Speed** | Instant (no task) | Fast (one tokio task) |
//! | **State** | None (stubbed responses) | Real sharing state |
//! | **Argument capture** | Yes | No |
//! | **Error Injection** | Easy (`return_err`) | Requires a specific state |
//!
//! ## Usage
//!
//! ```rust
//! use space_share::ccv3::fake::FakeCloudControllerClient;
//! use space_share::ccv3::{CcError, CloudControllerClient};
//! use space_share::resources::RelationshipList;
//!
//! #[tokio::main]
//! async fn main() {
//!     let fake = FakeCloudControllerClient::new();
//!     fake.stub_share()
//!         .return_err(CcError::Api("boom".into()), ["a-warning"]);
//!
//!     let (result, warnings) = fake
//!         .share_resource_to_targets("instance-guid", &["space-guid".to_string()])
//!         .await;
//!
//!     assert_eq!(result, Err(CcError::Api("boom".into())));
//!     assert_eq!(&*warnings, ["a-warning".to_string()]);
//!     assert_eq!(fake.share_call_count(), 1);
//!     fake.verify();
//! }
//! ```
//!
//! A call with no stub queued panics, naming the operation. Clones of a fake share the
//! same stubs and call log, so hand one clone to the code under test and keep another
//! for assertions.

use crate::ccv3::{CcError, ClientResponse, CloudControllerClient, Warnings};
use crate::resources::RelationshipList;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Shared = Arc<Mutex<FakeState>>;

#[derive(Default)]
struct FakeState {
    share_stubs: VecDeque<ClientResponse<RelationshipList, CcError>>,
    share_calls: Vec<(String, Vec<String>)>,
    unshare_stubs: VecDeque<ClientResponse<(), CcError>>,
    unshare_calls: Vec<(String, String)>,
    get_stubs: VecDeque<ClientResponse<RelationshipList, CcError>>,
    get_calls: Vec<String>,
}

impl FakeState {
    fn remaining(&self) -> usize {
        self.share_stubs.len() + self.unshare_stubs.len() + self.get_stubs.len()
    }
}

/// A recording, stub-driven [`CloudControllerClient`].
#[derive(Clone, Default)]
pub struct FakeCloudControllerClient {
    state: Shared,
}

impl FakeCloudControllerClient {
    /// Creates a fake with no stubs and an empty call log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next `share_resource_to_targets` call.
    pub fn stub_share(&self) -> ShareStubBuilder {
        ShareStubBuilder {
            state: self.state.clone(),
        }
    }

    /// Queues a response for the next `unshare_resource_from_target` call.
    pub fn stub_unshare(&self) -> UnshareStubBuilder {
        UnshareStubBuilder {
            state: self.state.clone(),
        }
    }

    /// Queues a response for the next `get_shared_targets` call.
    pub fn stub_get_shared_targets(&self) -> GetSharedTargetsStubBuilder {
        GetSharedTargetsStubBuilder {
            state: self.state.clone(),
        }
    }

    pub fn share_call_count(&self) -> usize {
        self.state.lock().unwrap().share_calls.len()
    }

    /// Arguments received by the `n`th (zero-based) share call.
    ///
    /// # Panics
    /// If fewer than `n + 1` share calls were made.
    pub fn share_args_for_call(&self, n: usize) -> (String, Vec<String>) {
        let state = self.state.lock().unwrap();
        match state.share_calls.get(n) {
            Some(args) => args.clone(),
            None => panic!(
                "share_resource_to_targets called {} times, no call {}",
                state.share_calls.len(),
                n
            ),
        }
    }

    pub fn unshare_call_count(&self) -> usize {
        self.state.lock().unwrap().unshare_calls.len()
    }

    /// Arguments received by the `n`th (zero-based) unshare call.
    pub fn unshare_args_for_call(&self, n: usize) -> (String, String) {
        let state = self.state.lock().unwrap();
        match state.unshare_calls.get(n) {
            Some(args) => args.clone(),
            None => panic!(
                "unshare_resource_from_target called {} times, no call {}",
                state.unshare_calls.len(),
                n
            ),
        }
    }

    pub fn get_shared_targets_call_count(&self) -> usize {
        self.state.lock().unwrap().get_calls.len()
    }

    /// Argument received by the `n`th (zero-based) get call.
    pub fn get_shared_targets_args_for_call(&self, n: usize) -> String {
        let state = self.state.lock().unwrap();
        match state.get_calls.get(n) {
            Some(arg) => arg.clone(),
            None => panic!(
                "get_shared_targets called {} times, no call {}",
                state.get_calls.len(),
                n
            ),
        }
    }

    /// Verifies that every queued stub was consumed.
    pub fn verify(&self) {
        let remaining = self.state.lock().unwrap().remaining();
        if remaining != 0 {
            panic!("Not all stubs were consumed. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl CloudControllerClient for FakeCloudControllerClient {
    type Error = CcError;

    async fn share_resource_to_targets(
        &self,
        resource_guid: &str,
        target_guids: &[String],
    ) -> ClientResponse<RelationshipList, CcError> {
        let mut state = self.state.lock().unwrap();
        state
            .share_calls
            .push((resource_guid.to_string(), target_guids.to_vec()));
        match state.share_stubs.pop_front() {
            Some(response) => response,
            None => panic!("Unexpected share_resource_to_targets call: no stub queued"),
        }
    }

    async fn unshare_resource_from_target(
        &self,
        resource_guid: &str,
        target_guid: &str,
    ) -> ClientResponse<(), CcError> {
        let mut state = self.state.lock().unwrap();
        state
            .unshare_calls
            .push((resource_guid.to_string(), target_guid.to_string()));
        match state.unshare_stubs.pop_front() {
            Some(response) => response,
            None => panic!("Unexpected unshare_resource_from_target call: no stub queued"),
        }
    }

    async fn get_shared_targets(
        &self,
        resource_guid: &str,
    ) -> ClientResponse<RelationshipList, CcError> {
        let mut state = self.state.lock().unwrap();
        state.get_calls.push(resource_guid.to_string());
        match state.get_stubs.pop_front() {
            Some(response) => response,
            None => panic!("Unexpected get_shared_targets call: no stub queued"),
        }
    }
}

/// Builder for share stubs.
pub struct ShareStubBuilder {
    state: Shared,
}

impl ShareStubBuilder {
    /// Sets the stub to succeed with `list`.
    pub fn return_ok(self, list: RelationshipList, warnings: impl Into<Warnings>) {
        let mut state = self.state.lock().unwrap();
        state.share_stubs.push_back((Ok(list), warnings.into()));
    }

    /// Sets the stub to fail with `error`.
    pub fn return_err(self, error: CcError, warnings: impl Into<Warnings>) {
        let mut state = self.state.lock().unwrap();
        state.share_stubs.push_back((Err(error), warnings.into()));
    }
}

/// Builder for unshare stubs.
pub struct UnshareStubBuilder {
    state: Shared,
}

impl UnshareStubBuilder {
    pub fn return_ok(self, warnings: impl Into<Warnings>) {
        let mut state = self.state.lock().unwrap();
        state.unshare_stubs.push_back((Ok(()), warnings.into()));
    }

    pub fn return_err(self, error: CcError, warnings: impl Into<Warnings>) {
        let mut state = self.state.lock().unwrap();
        state.unshare_stubs.push_back((Err(error), warnings.into()));
    }
}

/// Builder for get-shared-targets stubs.
pub struct GetSharedTargetsStubBuilder {
    state: Shared,
}

impl GetSharedTargetsStubBuilder {
    pub fn return_ok(self, list: RelationshipList, warnings: impl Into<Warnings>) {
        let mut state = self.state.lock().unwrap();
        state.get_stubs.push_back((Ok(list), warnings.into()));
    }

    pub fn return_err(self, error: CcError, warnings: impl Into<Warnings>) {
        let mut state = self.state.lock().unwrap();
        state.get_stubs.push_back((Err(error), warnings.into()));
    }
}
