//! Update logic for the data table.
//!
//! Server-side mode never mutates local state: sort and page requests are
//! forwarded to the caller, which re-fetches and re-renders with new
//! props. Client-side mode owns both and re-renders directly.

use yew::prelude::*;

use super::messages::Msg;
use super::props::TableRow;
use super::state::{next_sort, DataTable};

pub fn update<T>(table: &mut DataTable<T>, ctx: &Context<DataTable<T>>, msg: Msg) -> bool
where
    T: TableRow + Clone + PartialEq + 'static,
{
    let props = ctx.props();
    match msg {
        Msg::SortClicked(key) => {
            if props.server_side {
                let next = next_sort(props.sort.as_ref(), &key);
                props
                    .on_sort_change
                    .emit((key, next.map(|spec| spec.direction)));
                false
            } else {
                table.sort = next_sort(table.sort.as_ref(), &key);
                true
            }
        }
        Msg::PageChanged(page) => {
            if props.server_side {
                props.on_page_change.emit(page);
                false
            } else {
                table.current_page = page;
                true
            }
        }
        Msg::ResetPage => {
            if table.current_page != 1 {
                table.current_page = 1;
                true
            } else {
                false
            }
        }
    }
}
