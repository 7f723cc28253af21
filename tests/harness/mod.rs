#![allow(dead_code, unused_imports)]

pub(crate) mod git_remote;
pub(crate) mod test_context;

pub(crate) use test_context::TestContext;
