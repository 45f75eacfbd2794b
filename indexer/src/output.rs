use search_core::{paginate, Document, DocumentId, DocumentStatus};
use std::fmt::Display;
use std::io::{self, Write};

/// `[a, b, c]`
pub fn join_list<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

pub fn write_documents<W: Write>(out: &mut W, docs: &[Document]) -> io::Result<()> {
    for doc in docs {
        writeln!(out, "{doc}")?;
    }
    Ok(())
}

/// A `Page i` header (from 1) before each page, then one document per line.
pub fn write_pages<W: Write>(out: &mut W, docs: &[Document], page_size: usize) -> io::Result<()> {
    for (i, page) in paginate(docs, page_size).iter().enumerate() {
        writeln!(out, "Page {}", i + 1)?;
        write_documents(out, page)?;
    }
    Ok(())
}

pub fn write_match<W: Write>(
    out: &mut W,
    id: DocumentId,
    words: &[String],
    status: DocumentStatus,
) -> io::Result<()> {
    writeln!(out, "{{ document_id = {id}, status = {status}, words = {} }}", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_list_brackets() {
        assert_eq!(join_list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(join_list::<u8>(&[]), "[]");
    }

    #[test]
    fn pages_start_with_header() {
        let docs = [Document::new(1, 0.5, 2), Document::new(2, 0.25, 1), Document::new(3, 0.125, 0)];
        let mut buf = Vec::new();
        write_pages(&mut buf, &docs, 2).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Page 1\n\
             { document_id = 1, relevance = 0.5, rating = 2 }\n\
             { document_id = 2, relevance = 0.25, rating = 1 }\n\
             Page 2\n\
             { document_id = 3, relevance = 0.125, rating = 0 }\n"
        );
    }

    #[test]
    fn match_line() {
        let mut buf = Vec::new();
        write_match(&mut buf, 2, &["curly".into(), "hair".into()], DocumentStatus::Active).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{ document_id = 2, status = active, words = curly hair }\n");
    }
}
