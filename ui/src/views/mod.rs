mod home;
pub use home::Home;

mod destinations;
pub use destinations::Destinations;

mod destination_info;
pub use destination_info::DestinationInfo;

mod journal;
pub use journal::Journal;

mod contact;
pub use contact::Contact;

mod reservations;
pub use reservations::Reservations;
