pub(crate) mod browse;
pub(crate) mod logs;
pub(crate) mod serve;
