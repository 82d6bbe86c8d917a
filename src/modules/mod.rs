pub mod contact;
pub mod navigation;
pub mod portfolio;
pub mod skill;
