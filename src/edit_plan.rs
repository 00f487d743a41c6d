//! The edit plan manages stylesheet modifications using textum patches.
//!
//! Each edit replaces one comment, addressed by char offsets so that textum can resolve
//! it against the file. Plans serialise to JSON so that a dry run can be reviewed and
//! later applied unchanged with `--apply-plan`.

use crate::error::{Error, Result};
use crate::stylesheet::Stylesheet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use textum::{Boundary, BoundaryMode, Patch, PatchSet, Snippet, Target};
use tracing::info;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable collection of file modifications for atomic application.
pub struct EditPlan {
    /// Individual comment replacements grouped for batch processing.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Char range and content for replacing one comment in a file.
pub struct Edit {
    /// Target file path for this modification.
    pub file_name: String,
    /// Char offset of the opening `/*` (inclusive).
    pub char_start: usize,
    /// Char offset just past the closing `*/` (exclusive).
    pub char_end: usize,
    /// Line the comment starts on (1-indexed), for review only.
    pub line_start: usize,
    /// Replacement comment, delimiters included.
    pub replacement: String,
}

impl Edit {
    /// The textum patch replacing this edit's range.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or reversed.
    pub fn to_patch(&self) -> Result<Patch> {
        if self.char_start >= self.char_end {
            return Err(Error::InvalidEdit {
                file_name: self.file_name.clone(),
                char_start: self.char_start,
                char_end: self.char_end,
            });
        }
        // Both ends include their char, so the range closes on the last char of `*/`.
        let start = Boundary::new(Target::Char(self.char_start), BoundaryMode::Include);
        let end = Boundary::new(Target::Char(self.char_end - 1), BoundaryMode::Include);

        Ok(Patch {
            file: self.file_name.clone(),
            snippet: Snippet::Between { start, end },
            replacement: self.replacement.clone(),
        })
    }
}

impl EditPlan {
    #[must_use]
    /// Edits turning the source of `sheet` into its current serialization.
    ///
    /// Only comments whose rendering differs from their original bytes are listed.
    pub fn for_stylesheet(file_name: &str, sheet: &Stylesheet) -> Self {
        let mut edits = Vec::new();
        // Comments arrive in source order, so offsets are counted forward once.
        let (mut byte_pos, mut char_pos, mut line) = (0, 0, 1);
        sheet.walk_comments(|_, comment| {
            let Some(span) = &comment.span else {
                return;
            };
            let (Some(before), Some(original)) = (
                sheet.source.get(byte_pos..span.start),
                sheet.source.get(span.clone()),
            ) else {
                return;
            };
            let char_start = char_pos + before.chars().count();
            let char_end = char_start + original.chars().count();
            let line_start = line + before.matches('\n').count();

            byte_pos = span.end;
            char_pos = char_end;
            line = line_start + original.matches('\n').count();

            let replacement = comment.to_css();
            if replacement == original {
                return;
            }
            edits.push(Edit {
                file_name: file_name.to_string(),
                char_start,
                char_end,
                line_start,
                replacement,
            });
        });
        Self { edits }
    }

    #[must_use]
    /// Whether the plan changes nothing.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Append all edits of `other`.
    pub fn extend(&mut self, other: Self) {
        self.edits.extend(other.edits);
    }

    /// Apply all edits in the plan using textum patches.
    ///
    /// Groups edits by file and uses textum's `PatchSet` to apply each file's changes
    /// together, so overlapping edits are rejected before anything is written.
    ///
    /// # Errors
    ///
    /// Returns an error if an edit is malformed, patching fails, or a file cannot be
    /// written.
    pub fn apply(&self) -> Result<()> {
        let mut file_groups: BTreeMap<&str, Vec<&Edit>> = BTreeMap::new();
        for edit in &self.edits {
            file_groups
                .entry(edit.file_name.as_str())
                .or_default()
                .push(edit);
        }

        for (file_name, edits) in file_groups {
            let mut patchset = PatchSet::new();
            for edit in &edits {
                patchset.add(edit.to_patch()?);
            }

            let results = patchset
                .apply_to_files()
                .map_err(|source| Error::Patch {
                    file_name: file_name.to_string(),
                    source,
                })?;

            if let Some(new_content) = results.get(file_name) {
                fs::write(file_name, new_content).map_err(|source| Error::FileWrite {
                    path: file_name.into(),
                    source,
                })?;
            }
            info!(file = file_name, edits = edits.len(), "applied edits");
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
