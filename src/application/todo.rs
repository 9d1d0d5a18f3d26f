//! Todo use cases: read-or-seed, create-on-first-visit, add and delete.

use tracing::{debug, info};
use url::Url;

use crate::domain::{capitalize, default_items, is_home, Item, ItemId, TodoList, HOME_LIST};
use crate::error::{Error, Result};
use crate::port::inbound::todo::{ListOutcome, ListView, TodoService};
use crate::port::outbound::store::{ItemStore, ListStore};

/// Application service implementing [`TodoService`] over the store ports.
///
/// The home list is served from `items`; every other list from `lists`.
pub struct TodoApp<I, L> {
    items: I,
    lists: L,
}

impl<I, L> TodoApp<I, L>
where
    I: ItemStore,
    L: ListStore,
{
    #[must_use]
    pub fn new(items: I, lists: L) -> Self {
        Self { items, lists }
    }
}

/// Path of the page showing `name`, with the name percent-encoded as a
/// single path segment.
///
/// `.` and `..` have no such path: URL parsers resolve them even when
/// percent-encoded, so they are reported as missing lists.
pub fn list_path(name: &str) -> Result<String> {
    if is_home(name) {
        return Ok("/".to_string());
    }
    if matches!(name, "." | "..") {
        return Err(Error::list_not_found(name));
    }
    let mut url = Url::parse("http://localhost/")?;
    url.path_segments_mut()
        .map_err(|()| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push(name);
    Ok(url.path().to_string())
}

impl<I, L> TodoService for TodoApp<I, L>
where
    I: ItemStore + 'static,
    L: ListStore + 'static,
{
    async fn home_list(&self) -> Result<ListOutcome> {
        let items = self.items.list().await?;
        if items.is_empty() {
            if self.items.seed_if_empty(default_items()).await? {
                info!("Successfully saved default items");
            }
            return Ok(ListOutcome::Redirect("/".to_string()));
        }

        Ok(ListOutcome::Show(ListView {
            title: HOME_LIST.to_string(),
            items,
        }))
    }

    async fn named_list(&self, raw_name: &str) -> Result<ListOutcome> {
        let name = capitalize(raw_name);
        let path = list_path(&name)?;
        if is_home(&name) {
            return Ok(ListOutcome::Redirect(path));
        }

        match self.lists.find_by_name(&name).await? {
            Some(list) => Ok(ListOutcome::Show(ListView {
                title: list.name,
                items: list.items,
            })),
            None => {
                let list = TodoList::with_defaults(name.as_str());
                if self.lists.create(&list).await? {
                    info!(list = %name, "Created list");
                }
                Ok(ListOutcome::Redirect(path))
            }
        }
    }

    async fn add_item(&self, list: &str, item_name: &str) -> Result<String> {
        let item = Item::new(item_name);
        if is_home(list) {
            self.items.insert(&item).await?;
        } else {
            self.lists.push_item(list, &item).await?;
        }
        debug!(list, item = %item.id, "Added item");
        list_path(list)
    }

    async fn delete_item(&self, list: &str, id: &ItemId) -> Result<String> {
        let removed = if is_home(list) {
            self.items.remove(id).await?
        } else {
            self.lists.pull_item(list, id).await?
        };
        debug!(list, item = %id, removed, "Deleted item");
        list_path(list)
    }
}
