pub mod booking_history;
pub mod payment;
pub mod reservation;
pub mod station_finder;

pub use booking_history::BookingHistory;
pub use payment::Payment;
pub use reservation::Reservation;
pub use station_finder::StationFinder;
