//! Marketing page sections

mod contact;
mod downloads;
mod features;
mod footer;
mod hero;
mod highlights;
mod how_it_works;

pub use contact::Contact;
pub use downloads::Downloads;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use highlights::Highlights;
pub use how_it_works::HowItWorks;
