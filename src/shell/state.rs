use crate::modules::entertainers::adapters::outbound::entertainer_store::EntertainerStore;
use crate::modules::entertainers::adapters::outbound::summary_queries::EntertainerSummaryQueries;
use crate::modules::entertainers::use_cases::create_entertainer::handler::CreateEntertainerHandler;
use crate::modules::entertainers::use_cases::delete_entertainer::handler::DeleteEntertainerHandler;
use crate::modules::entertainers::use_cases::get_entertainer::handler::GetEntertainerHandler;
use crate::modules::entertainers::use_cases::list_entertainers::handler::ListEntertainersHandler;
use crate::modules::entertainers::use_cases::update_entertainer::handler::UpdateEntertainerHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListEntertainersHandler<dyn EntertainerSummaryQueries>>,
    pub get_handler: Arc<GetEntertainerHandler<dyn EntertainerStore>>,
    pub create_handler: Arc<CreateEntertainerHandler<dyn EntertainerStore>>,
    pub update_handler: Arc<UpdateEntertainerHandler<dyn EntertainerStore>>,
    pub delete_handler: Arc<DeleteEntertainerHandler<dyn EntertainerStore>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn EntertainerStore>,
        queries: Arc<dyn EntertainerSummaryQueries>,
    ) -> Self {
        Self {
            list_handler: Arc::new(ListEntertainersHandler::new(queries)),
            get_handler: Arc::new(GetEntertainerHandler::new(store.clone())),
            create_handler: Arc::new(CreateEntertainerHandler::new(store.clone())),
            update_handler: Arc::new(UpdateEntertainerHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteEntertainerHandler::new(store)),
        }
    }

    /// Wires a single adapter that serves both the records and the summaries.
    pub fn from_store<TStore>(store: Arc<TStore>) -> Self
    where
        TStore: EntertainerStore + EntertainerSummaryQueries + 'static,
    {
        Self::new(store.clone(), store)
    }
}
