//! Widgets for the flight board: the hour-grouped timeline, the selected
//! flight's card, and its route map.  Every widget is handed `now`
//! explicitly and reads the clock nowhere else.

pub mod card;
pub mod layout;
pub mod map;
pub mod theme;
pub mod timeline_widget;
