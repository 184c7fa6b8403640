pub enum Msg {
    SortClicked(String),
    PageChanged(usize),
    ResetPage,
}
