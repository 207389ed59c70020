mod lifecycle;

pub use lifecycle::{
    cancel_enrollment, cancel_event, confirm_attendance, create_event, enroll, update_event,
};
