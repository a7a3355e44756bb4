use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::domain::{Folder, SortMode};
use crate::features::folder_list::state::{
    FolderListAction, FolderListMutation, FolderListPulse, FolderListState,
};
use crate::mvi::{MutationSink, Reactor};
use crate::usecase::{DeleteFolder, FetchFolderList};

pub struct FolderListReactor {
    fetch_folder_list: Arc<dyn FetchFolderList>,
    delete_folder: Arc<dyn DeleteFolder>,
}

impl FolderListReactor {
    pub fn new(
        fetch_folder_list: Arc<dyn FetchFolderList>,
        delete_folder: Arc<dyn DeleteFolder>,
    ) -> Self {
        Self {
            fetch_folder_list,
            delete_folder,
        }
    }

    fn fetch(
        &self,
        sort: SortMode,
        sink: MutationSink<FolderListMutation>,
    ) -> BoxFuture<'static, ()> {
        fetch_folder_list(Arc::clone(&self.fetch_folder_list), sort, sink).boxed()
    }
}

/// Fetch, prepend the "All" aggregate, and publish both the full and
/// visible lists. Failures become inline error state.
async fn fetch_folder_list(
    use_case: Arc<dyn FetchFolderList>,
    sort: SortMode,
    sink: MutationSink<FolderListMutation>,
) {
    match use_case.execute(sort).await {
        Ok(list) => {
            let mut folders = list.folders;
            folders.insert(0, Folder::all(list.total_link_count));
            sink.send(FolderListMutation::SetFolderList(folders.clone()));
            sink.send(FolderListMutation::SetVisible(folders));
        }
        Err(err) => {
            tracing::warn!(kind = err.kind(), "folder list fetch failed");
            sink.send(FolderListMutation::SetError(err.to_string()));
        }
    }
}

impl Reactor for FolderListReactor {
    type Action = FolderListAction;
    type Mutation = FolderListMutation;
    type State = FolderListState;
    type Pulse = FolderListPulse;

    fn initial_state(&self) -> FolderListState {
        FolderListState::default()
    }

    fn mutate(
        &self,
        action: FolderListAction,
        state: FolderListState,
        sink: MutationSink<FolderListMutation>,
    ) -> BoxFuture<'static, ()> {
        match action {
            FolderListAction::ViewDidLoad => self.fetch(SortMode::ByCreation, sink),

            FolderListAction::Refresh => {
                let use_case = Arc::clone(&self.fetch_folder_list);
                let sort = state.sort;
                async move {
                    fetch_folder_list(use_case, sort, sink.clone()).await;
                    // The spinner stops whether or not the fetch succeeded.
                    sink.send(FolderListMutation::SetEndRefreshing);
                }
                .boxed()
            }

            FolderListAction::SearchText(text) => {
                let folders = state.folders;
                async move {
                    if text.is_empty() {
                        sink.send(FolderListMutation::SetVisible(folders));
                        return;
                    }
                    let needle = text.to_lowercase();
                    let filtered = folders
                        .into_iter()
                        .filter(|folder| folder.title.to_lowercase().contains(&needle))
                        .collect();
                    sink.send(FolderListMutation::SetVisible(filtered));
                }
                .boxed()
            }

            FolderListAction::CreateFolderSucceed => self.fetch(state.sort, sink),

            FolderListAction::DeleteFolder(id) => {
                let delete = Arc::clone(&self.delete_folder);
                let fetch = Arc::clone(&self.fetch_folder_list);
                let sort = state.sort;
                async move {
                    match delete.execute(id).await {
                        // Re-fetch with the currently active sort, not a
                        // fixed default.
                        Ok(()) => fetch_folder_list(fetch, sort, sink).await,
                        Err(err) => {
                            tracing::warn!(kind = err.kind(), "folder delete failed");
                            sink.send(FolderListMutation::SetError(err.to_string()));
                        }
                    }
                }
                .boxed()
            }

            FolderListAction::UpdateSort(sort) => {
                let use_case = Arc::clone(&self.fetch_folder_list);
                async move {
                    sink.send(FolderListMutation::SetSortMode(sort));
                    fetch_folder_list(use_case, sort, sink).await;
                }
                .boxed()
            }
        }
    }

    fn reduce(mut state: FolderListState, mutation: FolderListMutation) -> FolderListState {
        match mutation {
            FolderListMutation::SetFolderList(folders) => {
                state.folders = folders;
                state.error = None;
            }
            FolderListMutation::SetVisible(folders) => {
                state.visible = folders;
            }
            FolderListMutation::SetSortMode(sort) => {
                state.sort = sort;
            }
            FolderListMutation::SetEndRefreshing => {}
            FolderListMutation::SetError(message) => {
                state.error = Some(message);
            }
        }
        state
    }

    fn pulse(mutation: &FolderListMutation) -> Option<FolderListPulse> {
        match mutation {
            FolderListMutation::SetEndRefreshing => Some(FolderListPulse::EndRefreshing),
            _ => None,
        }
    }
}
