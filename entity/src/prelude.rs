pub use super::enrollment::Entity as Enrollment;
pub use super::hotel::Entity as Hotel;
pub use super::room::Entity as Room;
pub use super::session::Entity as Session;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_type::Entity as TicketType;
pub use super::user::Entity as User;
