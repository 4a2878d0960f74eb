#![allow(clippy::float_cmp)]

mod dispatch;
mod hardsphere;
mod parallelepiped;
mod snapshot;
