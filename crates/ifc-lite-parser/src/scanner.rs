// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fast entity scanner using SIMD-accelerated byte searching
//!
//! Scans IFC files to discover entities without full parsing.

use crate::tokenizer::parse_header_records;
use ifc_lite_model::{AttributeValue, IfcType, ModelMetadata};
use memchr::{memchr, memmem};
use rustc_hash::FxHashMap;

/// Entity index mapping ID to byte offsets
pub type EntityIndex = FxHashMap<u32, (usize, usize)>;

/// Type index mapping each entity type to its instances, in file order
pub type TypeIndex = FxHashMap<IfcType, Vec<u32>>;

/// Fast entity scanner for IFC files
///
/// Uses memchr for SIMD-accelerated scanning to quickly find entity
/// boundaries without full parsing.
pub struct EntityScanner<'a> {
    content: &'a str,
    pos: usize,
}

impl<'a> EntityScanner<'a> {
    /// Create a new scanner for the given content
    ///
    /// Scanning starts after the `DATA;` marker.
    pub fn new(content: &'a str) -> Self {
        let pos = data_section_start(content).unwrap_or(content.len());
        Self { content, pos }
    }

    /// Scan to find the next entity
    ///
    /// Returns (id, type_name, start_byte, end_byte)
    pub fn next_entity(&mut self) -> Option<(u32, &'a str, usize, usize)> {
        let bytes = self.content.as_bytes();

        while self.pos < bytes.len() {
            let hash_pos = memchr(b'#', &bytes[self.pos..])?;
            self.pos += hash_pos;

            // Definitions start a line; references sit inside attribute lists
            if !self.at_line_start() {
                self.pos += 1;
                continue;
            }

            let start = self.pos;
            self.pos += 1;
            let id_start = self.pos;

            while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }

            if self.pos == id_start {
                continue;
            }

            let Ok(id) = self.content[id_start..self.pos].parse::<u32>() else {
                continue;
            };

            self.skip_blanks();
            if self.pos >= bytes.len() || bytes[self.pos] != b'=' {
                continue;
            }
            self.pos += 1;
            self.skip_blanks();

            let type_start = self.pos;
            while self.pos < bytes.len()
                && (bytes[self.pos].is_ascii_alphanumeric() || bytes[self.pos] == b'_')
            {
                self.pos += 1;
            }

            if self.pos == type_start {
                continue;
            }

            let type_name = &self.content[type_start..self.pos];
            let end = self.find_entity_end()?;

            return Some((id, type_name, start, end));
        }

        None
    }

    fn at_line_start(&self) -> bool {
        let bytes = self.content.as_bytes();
        let mut i = self.pos;
        while i > 0 {
            match bytes[i - 1] {
                b' ' | b'\t' => i -= 1,
                b'\n' | b'\r' | b';' => return true,
                _ => return false,
            }
        }
        true
    }

    fn skip_blanks(&mut self) {
        let bytes = self.content.as_bytes();
        while self.pos < bytes.len() && (bytes[self.pos] == b' ' || bytes[self.pos] == b'\t') {
            self.pos += 1;
        }
    }

    /// Find the end of an entity (semicolon), handling quoted strings
    fn find_entity_end(&mut self) -> Option<usize> {
        let bytes = self.content.as_bytes();
        let mut in_string = false;

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'\'' => {
                    if in_string && self.pos + 1 < bytes.len() && bytes[self.pos + 1] == b'\'' {
                        self.pos += 2;
                        continue;
                    }
                    in_string = !in_string;
                }
                b';' if !in_string => {
                    self.pos += 1;
                    return Some(self.pos);
                }
                _ => {}
            }
            self.pos += 1;
        }

        None
    }

    /// Build an index of all entities (ID -> byte offsets)
    pub fn build_index(content: &'a str) -> EntityIndex {
        Self::build_indexes(content).0
    }

    /// Build the offset index together with the per-type index
    ///
    /// When an id is defined twice the later definition wins.
    pub fn build_indexes(content: &'a str) -> (EntityIndex, TypeIndex) {
        let mut scanner = Self::new(content);
        let mut index = EntityIndex::default();
        let mut by_type = TypeIndex::default();

        while let Some((id, type_name, start, end)) = scanner.next_entity() {
            if index.insert(id, (start, end)).is_some() {
                for ids in by_type.values_mut() {
                    ids.retain(|existing| *existing != id);
                }
            }
            by_type.entry(IfcType::parse(type_name)).or_default().push(id);
        }

        (index, by_type)
    }

    /// Get total entity count
    pub fn entity_count(content: &'a str) -> usize {
        let mut scanner = Self::new(content);
        let mut count = 0;

        while scanner.next_entity().is_some() {
            count += 1;
        }

        count
    }
}

/// Byte offset just after the `DATA;` marker
pub fn data_section_start(content: &str) -> Option<usize> {
    memmem::find(content.as_bytes(), b"DATA;").map(|p| p + 5)
}

/// Parse the header section to extract metadata
///
/// Missing records leave the corresponding fields empty.
pub fn parse_header(content: &str) -> ModelMetadata {
    let mut info = ModelMetadata::default();

    let Some(header_start) = memmem::find(content.as_bytes(), b"HEADER;").map(|p| p + 7) else {
        return info;
    };
    let header_end = memmem::find(&content.as_bytes()[header_start..], b"ENDSEC;")
        .map(|p| header_start + p)
        .unwrap_or(content.len());

    for (name, args) in parse_header_records(&content[header_start..header_end]) {
        match name.as_str() {
            "FILE_SCHEMA" => {
                if let Some(first) = args.first().and_then(first_text) {
                    info.schema_version = first;
                }
            }
            "FILE_DESCRIPTION" => {
                info.file_description = args.first().and_then(joined_text);
            }
            "FILE_NAME" => {
                // FILE_NAME(name, timestamp, author, organization, preprocessor, originating_system, authorization)
                info.file_name = args.first().and_then(first_text);
                info.timestamp = args.get(1).and_then(first_text);
                info.author = args.get(2).and_then(first_text);
                info.organization = args.get(3).and_then(first_text);
                info.preprocessor_version = args.get(4).and_then(first_text);
                info.originating_system = args.get(5).and_then(first_text);
            }
            _ => {}
        }
    }

    info
}

/// First non-empty string of a header value or list
fn first_text(value: &AttributeValue) -> Option<String> {
    match value {
        AttributeValue::String(s) if !s.is_empty() => Some(s.clone()),
        AttributeValue::List(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

fn joined_text(value: &AttributeValue) -> Option<String> {
    match value {
        AttributeValue::List(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_string()).collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        other => first_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_NAME('test.ifc','2024-01-01T00:00:00',('Author'),('Org'),'Preprocessor','App','');
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCPROJECT('guid',$,'Project;1',$,$,$,$,$,#2);
#2=IFCUNITASSIGNMENT((#3));
  #3=IFCSIUNIT(*,.LENGTHUNIT.,.MILLI.,.METRE.);
#4=IFCWALL('guid',$,'Wall ''#1''',$,$,#5,#6,$);
ENDSEC;
END-ISO-10303-21;
"#;

    #[test]
    fn test_scanner_finds_entities() {
        let mut scanner = EntityScanner::new(TEST_IFC);
        let mut entities = Vec::new();

        while let Some((id, type_name, _, _)) = scanner.next_entity() {
            entities.push((id, type_name.to_string()));
        }

        assert_eq!(entities.len(), 4);
        assert_eq!(entities[0], (1, "IFCPROJECT".to_string()));
        assert_eq!(entities[2], (3, "IFCSIUNIT".to_string()));
        assert_eq!(entities[3], (4, "IFCWALL".to_string()));
    }

    #[test]
    fn test_entity_end_skips_quoted_semicolons() {
        let index = EntityScanner::build_index(TEST_IFC);
        let (start, end) = index[&1];
        assert!(TEST_IFC[start..end].ends_with("#2);"));
        assert!(TEST_IFC[start..end].contains("'Project;1'"));
    }

    #[test]
    fn test_build_indexes() {
        let (index, by_type) = EntityScanner::build_indexes(TEST_IFC);
        assert_eq!(index.len(), 4);
        assert!(index.contains_key(&1));
        assert!(index.contains_key(&4));
        assert_eq!(by_type.get(&IfcType::parse("IfcWall")), Some(&vec![4]));
        assert_eq!(EntityScanner::entity_count(TEST_IFC), 4);
    }

    #[test]
    fn test_redefined_id_keeps_last_definition() {
        let content = "DATA;\n#1=IFCWALL($);\n#1=IFCSLAB($);\nENDSEC;";
        let (index, by_type) = EntityScanner::build_indexes(content);
        assert_eq!(index.len(), 1);
        assert_eq!(by_type.get(&IfcType::parse("IFCWALL")), Some(&Vec::new()));
        assert_eq!(by_type.get(&IfcType::parse("IFCSLAB")), Some(&vec![1]));
    }

    #[test]
    fn test_parse_header() {
        let info = parse_header(TEST_IFC);
        assert_eq!(info.schema_version, "IFC2X3");
        assert_eq!(info.file_name.as_deref(), Some("test.ifc"));
        assert_eq!(info.author.as_deref(), Some("Author"));
        assert_eq!(info.organization.as_deref(), Some("Org"));
        assert_eq!(info.originating_system.as_deref(), Some("App"));
        assert_eq!(
            info.file_description.as_deref(),
            Some("ViewDefinition [CoordinationView]")
        );
    }

    #[test]
    fn test_missing_header_yields_empty_metadata() {
        let info = parse_header("DATA;\n#1=IFCWALL($);\nENDSEC;");
        assert!(info.schema_version.is_empty());
        assert!(info.file_name.is_none());
    }
}
