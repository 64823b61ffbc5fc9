use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Display, Write};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use thread_local::ThreadLocal;
use tracing::dispatcher::SetGlobalDefaultError;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_core::span::Current;
use tracing_core::Interest;

struct SpanState {
    /// number of existing handles to the span, it is dropped when this reaches zero
    handles: usize,
    /// name of the span, followed by its recorded fields
    description: String,
    metadata: &'static Metadata<'static>,
    entered: Option<Instant>,
    /// nesting depth, root spans have depth 0
    depth: usize
}

///
/// A minimal [`Subscriber`] that prints the progress of long-running algorithms to stdout.
///
/// Every span up to depth `max_depth` is printed when it is entered, and again with the
/// elapsed time when it is exited. `INFO` events are printed if they occur within a span
/// that is printed, or outside of any span. Span nesting is tracked per thread.
///
pub struct LogAlgorithmSubscriber {
    next_id: AtomicU64,
    spans: Mutex<HashMap<Id, SpanState>>,
    entered_spans: ThreadLocal<RefCell<Vec<Id>>>,
    interested_level: RangeInclusive<Level>,
    max_depth: usize
}

impl LogAlgorithmSubscriber {

    fn new(levels: RangeInclusive<Level>, max_depth: usize) -> Self {
        LogAlgorithmSubscriber {
            next_id: AtomicU64::new(1),
            spans: Mutex::new(HashMap::new()),
            entered_spans: ThreadLocal::new(),
            interested_level: levels,
            max_depth: max_depth
        }
    }

    ///
    /// Installs the subscriber as global default, recording all spans and events with a level
    /// in `levels`. Fails if a global default subscriber has already been set.
    ///
    pub fn init(levels: RangeInclusive<Level>, max_depth: usize) -> Result<(), SetGlobalDefaultError> {
        tracing::subscriber::set_global_default(Self::new(levels, max_depth))
    }

    ///
    /// Installs the subscriber for use in tests, if no other subscriber is installed yet.
    ///
    pub fn init_test() {
        _ = Self::init(Level::INFO..=Level::INFO, 2);
    }

    fn spans<'a>(&'a self) -> MutexGuard<'a, HashMap<Id, SpanState>> {
        self.spans.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn entered_spans<'a>(&'a self) -> &'a RefCell<Vec<Id>> {
        self.entered_spans.get_or(|| RefCell::new(Vec::new()))
    }

    fn indent(depth: usize) -> String {
        "  ".repeat(depth)
    }
}

struct FieldRecorder {
    message: Option<String>,
    fields: String
}

impl FieldRecorder {

    fn new() -> Self {
        FieldRecorder { message: None, fields: String::new() }
    }
}

impl Display for FieldRecorder {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(message) = &self.message {
            write!(f, "{}", message)?;
        }
        if !self.fields.is_empty() {
            write!(f, "({})", self.fields)?;
        }
        Ok(())
    }
}

impl Visit for FieldRecorder {

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            if !self.fields.is_empty() {
                self.fields.push_str(", ");
            }
            _ = write!(self.fields, "{}={:?}", field.name(), value);
        }
    }
}

impl Subscriber for LogAlgorithmSubscriber {

    fn register_callsite(&self, metadata: &'static Metadata<'static>) -> Interest {
        if self.interested_level.contains(metadata.level()) {
            Interest::always()
        } else {
            Interest::never()
        }
    }

    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.interested_level.contains(metadata.level())
    }

    fn current_span(&self) -> Current {
        let current = self.entered_spans().borrow().last().cloned();
        match current.and_then(|id| self.spans().get(&id).map(|span| (id.clone(), span.metadata))) {
            Some((id, metadata)) => Current::new(id, metadata),
            None => Current::none()
        }
    }

    fn new_span(&self, span: &Attributes<'_>) -> Id {
        let id = Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed));
        let parent = if span.is_contextual() {
            self.entered_spans().borrow().last().cloned()
        } else {
            span.parent().cloned()
        };
        let mut spans = self.spans();
        let depth = parent.as_ref().and_then(|parent| spans.get(parent)).map(|parent| parent.depth + 1).unwrap_or(0);

        let mut description = FieldRecorder::new();
        span.record(&mut description);
        description.message = Some(span.metadata().name().to_owned());

        spans.insert(id.clone(), SpanState {
            handles: 1,
            description: description.to_string(),
            metadata: span.metadata(),
            entered: None,
            depth: depth
        });
        return id;
    }

    fn record(&self, span: &Id, values: &Record<'_>) {
        if let Some(span) = self.spans().get_mut(span) {
            let mut description = FieldRecorder::new();
            values.record(&mut description);
            _ = write!(span.description, "{}", description);
        }
    }

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() != Level::INFO {
            return;
        }
        let depth = match self.entered_spans().borrow().last() {
            Some(id) => self.spans().get(id).map(|span| span.depth + 1).unwrap_or(0),
            None => 0
        };
        if depth <= self.max_depth {
            let mut description = FieldRecorder::new();
            event.record(&mut description);
            println!("{}{}", Self::indent(depth), description);
        }
    }

    fn enter(&self, span: &Id) {
        self.entered_spans().borrow_mut().push(span.clone());
        if let Some(state) = self.spans().get_mut(span) {
            state.entered = Some(Instant::now());
            if state.depth <= self.max_depth {
                println!("{}{}", Self::indent(state.depth), state.description);
            }
        }
    }

    fn exit(&self, span: &Id) {
        {
            let mut entered_spans = self.entered_spans().borrow_mut();
            if let Some(index) = entered_spans.iter().rposition(|id| id == span) {
                entered_spans.remove(index);
            }
        }
        if let Some(state) = self.spans().get_mut(span) {
            if let Some(entered) = state.entered.take() {
                if state.depth <= self.max_depth {
                    println!("{}{} done ({}us)", Self::indent(state.depth), state.metadata.name(), entered.elapsed().as_micros());
                }
            }
        }
    }

    fn clone_span(&self, id: &Id) -> Id {
        if let Some(state) = self.spans().get_mut(id) {
            state.handles += 1;
        }
        return id.clone();
    }

    fn try_close(&self, id: Id) -> bool {
        let mut spans = self.spans();
        let closed = match spans.get_mut(&id) {
            Some(state) => {
                state.handles -= 1;
                state.handles == 0
            },
            None => false
        };
        if closed {
            _ = spans.remove(&id);
        }
        return closed;
    }
}

#[test]
fn test_field_recorder() {
    let mut recorder = FieldRecorder::new();
    assert_eq!("", recorder.to_string());
    recorder.message = Some("buchberger".to_owned());
    assert_eq!("buchberger", recorder.to_string());
    recorder.fields.push_str("generators=3");
    assert_eq!("buchberger(generators=3)", recorder.to_string());
}

#[test]
fn test_nested_spans() {
    let subscriber = LogAlgorithmSubscriber::new(Level::INFO..=Level::TRACE, 1);
    tracing::subscriber::with_default(subscriber, || {
        tracing::span!(Level::INFO, "outer", n = 1).in_scope(|| {
            tracing::span!(Level::INFO, "inner").in_scope(|| {
                tracing::event!(Level::INFO, value = 2, "progress");
            });
        });
    });
}
