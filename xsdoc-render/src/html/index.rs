//! Index of rendered layouts.

use xsdoc_model::Layout;

/// One `<li>` entry per layout, sorted by layout code.
#[must_use]
pub fn index_entries(layouts: &[Layout]) -> String {
    let mut sorted: Vec<&Layout> = layouts.iter().collect();
    sorted.sort_by(|a, b| a.code().cmp(b.code()));

    let mut output = String::new();
    for layout in sorted {
        output.push_str(&format!(
            "<li><a href=\"#{}\">{} - {}</a></li>\n",
            layout.name(),
            layout.code(),
            layout.description()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::process_layout;
    use xsdoc_schema::{TypeTable, parse_document};

    const EMPLOYER_LAYOUT: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="eSocial">
        <xs:annotation><xs:documentation>S-1000 - Informações do Empregador</xs:documentation></xs:annotation>
        <xs:complexType><xs:sequence>
            <xs:element name="evtInfoEmpregador"><xs:complexType><xs:sequence>
                <xs:element name="nrInsc">
                    <xs:simpleType>
                        <xs:restriction base="xs:string"><xs:length value="14"/></xs:restriction>
                    </xs:simpleType>
                </xs:element>
            </xs:sequence></xs:complexType></xs:element>
        </xs:sequence></xs:complexType>
    </xs:element>
</xs:schema>"#;

    #[test]
    fn test_entries_sorted_by_code() {
        let document = parse_document(EMPLOYER_LAYOUT).expect("Failed to parse layout");
        let employer = Layout::build(&document, &TypeTable::new()).expect("Failed to build layout");

        let output = index_entries(&[process_layout(), employer]);
        assert_eq!(
            output,
            concat!(
                "<li><a href=\"#evtInfoEmpregador\">S-1000 - Informações do Empregador</a></li>\n",
                "<li><a href=\"#evtTabProcesso\">S-1070 - Tabela de Processos Administrativos/Judiciais</a></li>\n",
            )
        );
    }

    #[test]
    fn test_no_layouts() {
        assert!(index_entries(&[]).is_empty());
    }
}
