mod availability;
mod booking;
mod formats;
mod member;
mod registration;
mod template;
