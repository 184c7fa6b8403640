//! Generic paginated, sortable data table.
//!
//! Two operating modes share one component:
//! - client-side: the caller hands over the full row array and the table
//!   sorts and slices it locally;
//! - server-side: paging and sorting decisions are delegated to the
//!   caller, which re-fetches and supplies exactly the rows to show.
//!
//! The table performs no I/O and has no error states of its own.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::{Column, DataTableProps, TableRow};
pub use state::{DataTable, SortDirection, SortSpec};

impl<T> Component for DataTable<T>
where
    T: TableRow + Clone + PartialEq + 'static,
{
    type Message = Msg;
    type Properties = DataTableProps<T>;

    fn create(_ctx: &Context<Self>) -> Self {
        DataTable::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // A different dataset length means the old page index may point
        // past the end; snap back to page 1 on the next tick.
        if !ctx.props().server_side && old_props.rows.len() != ctx.props().rows.len() {
            ctx.link().send_message(Msg::ResetPage);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
