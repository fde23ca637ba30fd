//! Insertion modes for the tree-construction state machine.

/// Named state of the tree constructor; decides how the next token is
/// interpreted. The enum is public because parser diagnostics carry the mode
/// the constructor was in when the error fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InsertionMode {
    #[default]
    Initial,
    BeforeHtml,
    BeforeHead,
    InHead,
    InHeadNoscript,
    AfterHead,
    InBody,
    Text,
    InTable,
    InTableText,
    InCaption,
    InColumnGroup,
    InTableBody,
    InRow,
    InCell,
    InSelect,
    InSelectInTable,
    /// Reserved for `<template>` handling, which this parser does not
    /// implement; the mode exists so diagnostics and mode snapshots stay
    /// complete.
    InTemplate,
    AfterBody,
    InFrameset,
    AfterFrameset,
    AfterAfterBody,
    AfterAfterFrameset,
}
