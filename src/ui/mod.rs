//! UI 渲染模块

pub mod components;
pub mod home;
