pub mod dashboard;
pub mod book_parcel;
pub mod booking_history;
pub mod track_parcel;

pub use dashboard::CustomerDashboardView;
pub use book_parcel::BookParcelView;
pub use booking_history::BookingHistoryView;
pub use track_parcel::TrackParcelView;
