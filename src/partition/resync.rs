//! Record boundary resynchronization (§4.C).
//!
//! Locates the start of a record given an arbitrary byte offset into an
//! already-loaded buffer. FASTQ resync is the hard case: a quality line can
//! itself start with `@` or `+`, the same bytes that mark a header or
//! separator line, so disambiguating needs up to four lines of lookahead.
//! FASTA has no such ambiguity: a record starts at the first line-initial
//! `>` at or after the offset.

use crate::fastx::SeqFormat;

use super::error::{Error, ErrorKind, Result};

/// Resolves the byte offset of the next record start at or after `offset`,
/// dispatching to the resync strategy for `format`.
pub fn resync(data: &[u8], offset: usize, format: SeqFormat) -> Result<usize> {
    match format {
        SeqFormat::FASTQ => resync_fastq(data, offset),
        SeqFormat::FASTA => resync_fasta(data, offset),
    }
}

/// Finds the next line starting with `>` at or after `offset`. `offset`
/// itself counts if it already sits at the start of such a line.
fn resync_fasta(data: &[u8], offset: usize) -> Result<usize> {
    let no_boundary = || {
        Error::new(ErrorKind::NoRecordBoundary {
            start: offset as u64,
            end: data.len() as u64,
        })
    };
    if offset >= data.len() {
        return Err(no_boundary());
    }
    let at_line_start = offset == 0 || data[offset - 1] == b'\n';
    if at_line_start && data[offset] == b'>' {
        return Ok(offset);
    }
    let mut pos = offset;
    loop {
        let nl = next_newline(data, pos).ok_or_else(no_boundary)?;
        let next = nl + 1;
        if next >= data.len() {
            return Err(no_boundary());
        }
        if data[next] == b'>' {
            return Ok(next);
        }
        pos = next;
    }
}

struct LineStarts {
    o: [usize; 4],
    /// `true` if `o[2]` indexes a real byte (needed to read `c[2]`).
    has_c2: bool,
}

fn next_newline(data: &[u8], from: usize) -> Option<usize> {
    memchr::memchr(b'\n', &data[from..]).map(|p| from + p)
}

fn line_starts(data: &[u8], offset: usize) -> Option<LineStarts> {
    let o0 = offset;
    if o0 >= data.len() {
        return None;
    }
    let o1 = next_newline(data, o0)? + 1;
    if o1 >= data.len() {
        return None;
    }
    let o2 = next_newline(data, o1)? + 1;
    let has_c2 = o2 < data.len();
    if !has_c2 {
        return None;
    }
    let o3 = match next_newline(data, o2) {
        Some(nl) => nl + 1,
        None => data.len(),
    };
    Some(LineStarts {
        o: [o0, o1, o2, o3],
        has_c2,
    })
}

/// Resolves the byte offset of the next FASTQ record start at or after
/// `offset`.
///
/// Returns `ErrorKind::NoRecordBoundary` if there are not enough lines left
/// in `data` to disambiguate, or if none of the table's rows match.
fn resync_fastq(data: &[u8], offset: usize) -> Result<usize> {
    let ls = line_starts(data, offset).ok_or_else(|| {
        Error::new(ErrorKind::NoRecordBoundary {
            start: offset as u64,
            end: data.len() as u64,
        })
    })?;
    let LineStarts { o, has_c2 } = ls;
    let c0 = data[o[0]];
    let c1 = data[o[1]];
    let c2 = if has_c2 { data[o[2]] } else { 0 };

    // table row: @, ≠@, * -> o[0]
    if c0 == b'@' && c1 != b'@' {
        return Ok(o[0]);
    }
    // table row: @, @, * -> o[1]
    if c0 == b'@' && c1 == b'@' {
        return Ok(o[1]);
    }
    // table row: +, @, ≠@ -> o[1]
    if c0 == b'+' && c1 == b'@' && c2 != b'@' {
        return Ok(o[1]);
    }
    // table row: +, @, @ -> o[2]
    if c0 == b'+' && c1 == b'@' && c2 == b'@' {
        return Ok(o[2]);
    }
    // table row: +, ≠@, * -> o[2]
    if c0 == b'+' && c1 != b'@' {
        return Ok(o[2]);
    }
    // from here c0 is neither '@' nor '+'
    // table row: *, +, * -> o[3]
    if c1 == b'+' {
        return Ok(o[3]);
    }
    // table row: ≠@,≠+, @, * -> o[1]
    if c1 == b'@' {
        return Ok(o[1]);
    }
    Err(Error::new(ErrorKind::NoRecordBoundary {
        start: offset as u64,
        end: data.len() as u64,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resync_at_offset_zero_on_a_clean_record() {
        let data = b"@r1\nACGT\n+\n!!!!\n@r2\nACGT\n+\n!!!!\n";
        assert_eq!(resync(data, 0, SeqFormat::FASTQ).unwrap(), 0);
    }

    #[test]
    fn resync_mid_quality_line_starting_with_plus() {
        // first line here is a quality line starting with '+', followed by
        // a header line, then sequence, then a bare '+' separator.
        let data = b"+!!!!\n@ACGT\nGCCA\n+\nIIII\n";
        let header_pos = data
            .windows(5)
            .position(|w| w == b"@ACGT")
            .expect("fixture contains @ACGT");
        assert_eq!(resync(data, 0, SeqFormat::FASTQ).unwrap(), header_pos as usize);
    }

    #[test]
    fn ambiguous_qq_at_row_is_classified_per_table_not_specially_handled() {
        // a quality line beginning "+@@" is the open question flagged in
        // the design notes: the table still resolves it mechanically
        // (row "+,@,@ -> o[2]"), rather than being special-cased.
        let data = b"+@@!\n@r2\n@wr3\n+\nIIII\n";
        assert_eq!(resync(data, 0, SeqFormat::FASTQ).unwrap(), 9);
    }

    #[test]
    fn fails_when_no_boundary_is_locatable() {
        let data = b"not a fastq file at all";
        assert!(resync(data, 0, SeqFormat::FASTQ).is_err());
    }

    #[test]
    fn fasta_resync_at_exact_boundary_is_a_no_op() {
        let data = b">r1\nACGT\n>r2\nGGCC\n";
        assert_eq!(resync(data, 0, SeqFormat::FASTA).unwrap(), 0);
        assert_eq!(resync(data, 9, SeqFormat::FASTA).unwrap(), 9);
    }

    #[test]
    fn fasta_resync_mid_record_finds_the_next_header() {
        let data = b">r1\nACGTACGT\nACGT\n>r2\nGGCC\n";
        let next_header = data
            .windows(3)
            .position(|w| w == b">r2")
            .expect("fixture contains >r2");
        assert_eq!(resync(data, 5, SeqFormat::FASTA).unwrap(), next_header);
    }

    #[test]
    fn fasta_resync_fails_past_the_last_record() {
        let data = b">r1\nACGT\n";
        assert!(resync(data, 5, SeqFormat::FASTA).is_err());
    }
}
