//! View rendering for the data table: header with sort indicators, body
//! rows (or the single full-width empty row), and the pagination footer.

use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::props::{DataTableProps, TableRow};
use super::state::{
    page_bounds, page_slice, sort_rows, total_pages, DataTable, SortDirection, SortSpec,
};

pub fn view<T>(table: &DataTable<T>, ctx: &Context<DataTable<T>>) -> Html
where
    T: TableRow + Clone + PartialEq + 'static,
{
    let props = ctx.props();
    let link = ctx.link();

    let sort = if props.server_side {
        props.sort.clone()
    } else {
        table.sort.clone()
    };

    let current_page = if props.server_side {
        props.current_page.unwrap_or(1)
    } else {
        table.current_page
    };

    let total_count = if props.server_side {
        props.total_count.unwrap_or(props.rows.len())
    } else {
        props.rows.len()
    };

    let visible: Vec<T> = if props.server_side {
        props.rows.clone()
    } else {
        let mut rows = props.rows.clone();
        if let Some(spec) = &sort {
            sort_rows(&mut rows, spec);
        }
        page_slice(&rows, current_page, props.page_size).to_vec()
    };

    let pages = total_pages(total_count, props.page_size);
    let column_count = props.columns.len() + usize::from(props.actions.is_some());

    html! {
        <div class="data-table">
            <table>
                <thead>
                    <tr>
                        {
                            props.actions.as_ref().map(|_| html! {
                                <th class="data-table-actions-header">{ props.actions_label.clone() }</th>
                            })
                        }
                        { for props.columns.iter().map(|column| header_cell(link, column, sort.as_ref())) }
                    </tr>
                </thead>
                <tbody>
                    {
                        if visible.is_empty() {
                            html! {
                                <tr>
                                    <td class="data-table-empty" colspan={column_count.to_string()}>
                                        { props.empty_label.clone() }
                                    </td>
                                </tr>
                            }
                        } else {
                            visible.iter().map(|row| body_row(props, row)).collect::<Html>()
                        }
                    }
                </tbody>
            </table>
            { pagination(link, current_page, pages, props.page_size, total_count) }
        </div>
    }
}

fn header_cell<T>(
    link: &Scope<DataTable<T>>,
    column: &super::props::Column<T>,
    sort: Option<&SortSpec>,
) -> Html
where
    T: TableRow + Clone + PartialEq + 'static,
{
    let key = column.key;
    let onclick = column
        .sortable
        .then(|| link.callback(move |_: MouseEvent| Msg::SortClicked(key.to_string())));
    let indicator = sort
        .filter(|spec| spec.key == key)
        .map(|spec| match spec.direction {
            SortDirection::Ascending => " \u{2191}",
            SortDirection::Descending => " \u{2193}",
        })
        .unwrap_or_default();

    html! {
        <th
            class={classes!(column.sortable.then_some("sortable"))}
            {onclick}
        >
            { column.label }{ indicator }
        </th>
    }
}

fn body_row<T>(props: &DataTableProps<T>, row: &T) -> Html
where
    T: TableRow + Clone + PartialEq + 'static,
{
    let onclick = props.on_row_click.clone().map(|callback| {
        let row = row.clone();
        Callback::from(move |_: MouseEvent| callback.emit(row.clone()))
    });
    let clickable = onclick.is_some();

    html! {
        <tr key={row.row_id()} class={classes!(clickable.then_some("clickable"))} {onclick}>
            {
                props.actions.as_ref().map(|actions| html! {
                    <td
                        class="data-table-actions"
                        onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                    >
                        { actions.emit(row.clone()) }
                    </td>
                })
            }
            {
                for props.columns.iter().map(|column| {
                    let content = match &column.render {
                        Some(render) => render.emit(row.clone()),
                        None => html! { { row.field(column.key) } },
                    };
                    html! { <td>{ content }</td> }
                })
            }
        </tr>
    }
}

fn pagination<T>(
    link: &Scope<DataTable<T>>,
    current_page: usize,
    pages: usize,
    page_size: usize,
    total_count: usize,
) -> Html
where
    T: TableRow + Clone + PartialEq + 'static,
{
    if pages <= 1 {
        return html! {};
    }

    let (start, end) = page_bounds(current_page, page_size, total_count);
    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= pages;
    let on_prev =
        link.callback(move |_: MouseEvent| Msg::PageChanged(current_page.saturating_sub(1).max(1)));
    let on_next = link.callback(move |_: MouseEvent| Msg::PageChanged((current_page + 1).min(pages)));

    html! {
        <div class="data-table-pagination">
            <span class="range-label">
                { format!("Showing {start}\u{2013}{end} of {total_count}") }
            </span>
            <div class="pagination-controls">
                <button disabled={prev_disabled} onclick={on_prev}>{ "\u{2039}" }</button>
                <span>{ format!("Page {current_page} of {pages}") }</span>
                <button disabled={next_disabled} onclick={on_next}>{ "\u{203A}" }</button>
            </div>
        </div>
    }
}
