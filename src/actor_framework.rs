use std::collections::BTreeMap;
use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

/// Identifier assigned by a [`ResourceActor`] at insertion time.
pub type EntityId = u64;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + Debug + 'static {
    type CreateParams: Send + Sync + Debug;
    type Filter: Send + Sync + Debug;

    /// Name used in spans and log fields.
    const NAME: &'static str;

    fn id(&self) -> EntityId;

    /// Construct the full Entity from the assigned ID and creation parameters.
    ///
    /// Returning an error rejects the insertion without consuming the ID.
    fn from_create_params(id: EntityId, params: Self::CreateParams) -> Result<Self, String>;

    /// Whether this entity belongs in a filtered `List` result.
    fn matches(&self, filter: &Self::Filter) -> bool;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Entity rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: EntityId,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Single owner of one entity collection.
///
/// Entities are keyed by ID in a `BTreeMap`; since IDs only grow, iteration
/// order is insertion order.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Load fixture entities before the actor is spawned.
    pub fn seed<I>(&mut self, entries: I) -> Result<(), FrameworkError>
    where
        I: IntoIterator<Item = T::CreateParams>,
    {
        for params in entries {
            self.insert(params)?;
        }
        info!(entity = T::NAME, count = self.store.len(), "Seeded collection");
        Ok(())
    }

    #[instrument(name = "resource_actor", fields(entity = T::NAME), skip(self))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.insert(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    debug!(id, "Processing get request");
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter.as_ref().map_or(true, |f| item.matches(f)))
                        .cloned()
                        .collect();
                    debug!(count = items.len(), "Processed list request");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Shutdown => {
                    info!("Actor shutting down");
                    break;
                }
            }
        }
        info!("Actor stopped");
    }

    fn insert(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let id = self.next_id;
        match T::from_create_params(id, params) {
            Ok(item) => {
                self.next_id += 1;
                self.store.insert(id, item.clone());
                info!(id = item.id(), "Entity created");
                Ok(item)
            }
            Err(reason) => {
                error!(%reason, "Entity rejected");
                Err(FrameworkError::Rejected(reason))
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Debug)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: a derive would require `T: Clone` on the sender.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: EntityId) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self, filter: Option<T::Filter>) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { filter, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
