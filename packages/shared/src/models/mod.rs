pub mod administrator;
pub mod appeal;
pub mod attachment;
pub mod auth;
pub mod board;
pub mod comment;
pub mod engagement;
pub mod moderation;
pub mod notification;
pub mod pagination;
pub mod post;
pub mod report;
pub mod social_account;
pub mod thread;
pub mod topic;
pub mod vote;
