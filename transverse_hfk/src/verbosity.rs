//! A verbosity level plus an (optional) output sink, threaded through every
//! call instead of living in a `static`.

use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent,
    Quiet,
    Verbose,
}

impl Verbosity {
    pub fn at_least(self, other: Verbosity) -> bool {
        self >= other
    }
}

/// A callback invoked once per completed BFS layer with
/// `(num_ins, num_outs, edge_count)`. Carries no stability guarantee on
/// when or how often it fires.
pub trait ProgressSink {
    fn on_layer(&mut self, num_ins: i32, num_outs: i32, edge_count: usize);
}

impl<F: FnMut(i32, i32, usize)> ProgressSink for F {
    fn on_layer(&mut self, num_ins: i32, num_outs: i32, edge_count: usize) {
        self(num_ins, num_outs, edge_count)
    }
}

/// A no-op sink, used when the caller passes no output destination.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_layer(&mut self, _num_ins: i32, _num_outs: i32, _edge_count: usize) {}
}

/// Writes a progress line in `ins outs edgecount` format to an arbitrary
/// sink.
pub struct WriteSink<'a> {
    pub out: &'a mut dyn io::Write,
}

impl ProgressSink for WriteSink<'_> {
    fn on_layer(&mut self, num_ins: i32, num_outs: i32, edge_count: usize) {
        let _ = writeln!(self.out, "{num_ins} {num_outs} {edge_count}");
    }
}
