// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

// Original code found here:
// https://github.com/swsnr/systemd-journal-logger.rs/blob/v2.2.1/src/lib.rs#L76

use std::{env, ffi::OsStr, fmt::Display, io, os::fd::AsFd as _};

/// Whether stderr is the stream systemd advertises in `$JOURNAL_STREAM`
/// (`<device>:<inode>`, see `systemd.exec(5)`).
pub fn connected_to_journal() -> bool {
    let Some(journal_stream) = env::var_os("JOURNAL_STREAM") else {
        return false;
    };
    rustix::fs::fstat(io::stderr().as_fd())
        .is_ok_and(|stat| is_stream(&journal_stream, stat.st_dev, stat.st_ino))
}

fn is_stream(advertised: &OsStr, device: impl Display, inode: impl Display) -> bool {
    advertised.to_string_lossy() == format!("{device}:{inode}")
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("2049:1234", true)]
    #[case("2049:4321", false)]
    #[case("2049", false)]
    #[case("", false)]
    fn test_is_stream_compares_device_and_inode(#[case] advertised: &str, #[case] expected: bool) {
        assert_eq!(is_stream(OsStr::new(advertised), 2049, 1234), expected);
    }
}
