//! Deterministic engines that record every call.
//!
//! Used by the test suites and by `tagcall resolve`, which performs one dry-run dispatch.

use std::fmt;

use super::{HostOutput, Invocation, Param, Params, RenderMode, RenderingEngine, Target};

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCall {
    pub mode: RenderMode,
    pub target: Target,
    pub params: Params,
    pub has_block: bool,
}

impl fmt::Display for EngineCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = serde_json::Value::Array(self.params.clone());
        write!(f, "{} {} {}", self.mode, self.target, params)?;
        if self.has_block {
            f.write_str(" {..}")?;
        }
        Ok(())
    }
}

/// Records calls in order. Nodes are indices into [`RecordingEngine::calls`].
///
/// Blocks are run right after their call is recorded, so calls made from inside a block appear after the
/// enclosing call.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Vec<EngineCall>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub fn take(&mut self) -> Vec<EngineCall> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, mode: RenderMode, invocation: Invocation<'_>) -> usize {
        let Invocation { target, params, block } = invocation;
        let index = self.calls.len();
        self.calls.push(EngineCall {
            mode,
            target,
            params,
            has_block: block.is_some(),
        });
        if let Some(block) = block {
            block.run();
        }
        index
    }
}

impl RenderingEngine for RecordingEngine {
    type Node = usize;

    fn attach(&mut self, invocation: Invocation<'_>) -> usize {
        self.record(RenderMode::Attach, invocation)
    }

    fn build_detached(&mut self, invocation: Invocation<'_>) -> usize {
        self.record(RenderMode::Detached, invocation)
    }
}

/// Records host output calls instead of printing.
#[derive(Debug, Default)]
pub struct RecordingHost {
    printed: Vec<Params>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printed(&self) -> &[Params] {
        &self.printed
    }
}

impl HostOutput for RecordingHost {
    fn inspect(&mut self, params: &[Param]) {
        self.printed.push(params.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Block;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn records_mode_and_block_presence() {
        let mut engine = RecordingEngine::new();
        let ran = Cell::new(false);

        let first = engine.attach(Invocation::new(Target::tag("ul"), vec![], Some(Block::new(|| ran.set(true)))));
        let second = engine.build_detached(Invocation::new(Target::tag("li"), vec![json!("x")], None));

        assert_eq!((first, second), (0, 1));
        assert!(ran.get());
        assert_eq!(engine.calls()[0].mode, RenderMode::Attach);
        assert!(engine.calls()[0].has_block);
        assert_eq!(engine.calls()[1].mode, RenderMode::Detached);
        assert_eq!(engine.calls()[1].params, vec![json!("x")]);
    }

    #[test]
    fn display_is_compact() {
        let call = EngineCall {
            mode: RenderMode::Attach,
            target: Target::tag("a"),
            params: vec![json!({"href": "/"})],
            has_block: true,
        };
        assert_eq!(call.to_string(), r#"attach a [{"href":"/"}] {..}"#);
    }
}
