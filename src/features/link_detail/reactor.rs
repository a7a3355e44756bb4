use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::domain::Link;
use crate::features::link_detail::state::{
    LinkDetailAction, LinkDetailMutation, LinkDetailPulse, LinkDetailState,
};
use crate::mvi::{MutationSink, Reactor};
use crate::usecase::{DeleteLink, FetchTagList, UpdateLink};

pub struct LinkDetailReactor {
    link: Link,
    fetch_tag_list: Arc<dyn FetchTagList>,
    update_link: Arc<dyn UpdateLink>,
    delete_link: Arc<dyn DeleteLink>,
}

impl LinkDetailReactor {
    pub fn new(
        link: Link,
        fetch_tag_list: Arc<dyn FetchTagList>,
        update_link: Arc<dyn UpdateLink>,
        delete_link: Arc<dyn DeleteLink>,
    ) -> Self {
        Self {
            link,
            fetch_tag_list,
            update_link,
            delete_link,
        }
    }
}

impl Reactor for LinkDetailReactor {
    type Action = LinkDetailAction;
    type Mutation = LinkDetailMutation;
    type State = LinkDetailState;
    type Pulse = LinkDetailPulse;

    fn initial_state(&self) -> LinkDetailState {
        LinkDetailState::new(self.link.clone())
    }

    fn mutate(
        &self,
        action: LinkDetailAction,
        state: LinkDetailState,
        sink: MutationSink<LinkDetailMutation>,
    ) -> BoxFuture<'static, ()> {
        match action {
            LinkDetailAction::ViewDidLoad => {
                let fetch = Arc::clone(&self.fetch_tag_list);
                async move {
                    // Degrades to empty on failure; never an error here.
                    let tags = fetch.execute().await;
                    sink.send(LinkDetailMutation::SetTagList(tags));
                }
                .boxed()
            }

            LinkDetailAction::UpdateTags(tags) => {
                let update = Arc::clone(&self.update_link);
                let link = state.link;
                async move {
                    match update.execute(link, tags).await {
                        Ok(updated) => sink.send(LinkDetailMutation::SetLink(updated)),
                        Err(err) => {
                            tracing::warn!(kind = err.kind(), "link update failed");
                            sink.send(LinkDetailMutation::SetError(err.to_string()));
                        }
                    }
                }
                .boxed()
            }

            LinkDetailAction::DeleteLink => {
                let delete = Arc::clone(&self.delete_link);
                let id = state.link.id;
                async move {
                    match delete.execute(id).await {
                        Ok(()) => sink.send(LinkDetailMutation::SetDeleted),
                        Err(err) => {
                            tracing::warn!(kind = err.kind(), "link delete failed");
                            sink.send(LinkDetailMutation::SetError(err.to_string()));
                        }
                    }
                }
                .boxed()
            }
        }
    }

    fn reduce(mut state: LinkDetailState, mutation: LinkDetailMutation) -> LinkDetailState {
        match mutation {
            LinkDetailMutation::SetTagList(tags) => {
                state.all_tags = tags;
            }
            LinkDetailMutation::SetLink(link) => {
                state.link = link;
                state.error = None;
            }
            LinkDetailMutation::SetDeleted => {
                state.deleted = true;
            }
            LinkDetailMutation::SetError(message) => {
                state.error = Some(message);
            }
        }
        state
    }

    fn pulse(mutation: &LinkDetailMutation) -> Option<LinkDetailPulse> {
        match mutation {
            LinkDetailMutation::SetDeleted => Some(LinkDetailPulse::Dismiss),
            _ => None,
        }
    }
}
