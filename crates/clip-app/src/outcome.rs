/// What a single action ended up doing.
///
/// Every variant except [`ActionOutcome::Failed`] is a normal result; none of
/// them affects the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A non-empty clipboard payload was appended to the history.
    Captured,
    /// The clipboard was empty; nothing was stored.
    NothingToCapture,
    /// An entry was written to the clipboard and the paste shortcut emitted.
    Pasted,
    /// The history was empty; nothing was pasted.
    NothingToPaste,
    /// The chooser was cancelled or answered with an unusable selection.
    SelectionAborted,
    Cleared,
    /// A store, clipboard or keystroke failure turned the action into a no-op.
    Failed,
}
