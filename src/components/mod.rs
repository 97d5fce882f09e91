mod about;
mod app;
mod footer;
pub(crate) mod header;
mod hero;
mod how_it_works;
mod join_form;
mod mobile_menu;
mod roadmap;
mod stat;
mod transparency;

pub use about::About;
pub use app::App;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use join_form::JoinForm;
pub use mobile_menu::MobileMenu;
pub use roadmap::Roadmap;
pub use stat::Stat;
pub use transparency::Transparency;
