//! # xsdoc Bench
//!
//! Synthetic layouts for xsdoc performance testing.

/// Global types referenced by every synthetic layout.
pub const SYNTHETIC_TYPES: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:simpleType name="TS_codigo">
        <xs:restriction base="xs:string">
            <xs:minLength value="1"/>
            <xs:maxLength value="30"/>
        </xs:restriction>
    </xs:simpleType>
    <xs:simpleType name="TS_decimal_14_2">
        <xs:restriction base="xs:decimal">
            <xs:totalDigits value="14"/>
            <xs:fractionDigits value="2"/>
        </xs:restriction>
    </xs:simpleType>
    <xs:simpleType name="TS_valor">
        <xs:restriction base="TS_decimal_14_2"/>
    </xs:simpleType>
    <xs:complexType name="T_periodo">
        <xs:sequence>
            <xs:element name="iniValid" type="xs:date"/>
            <xs:element name="fimValid" type="xs:date" minOccurs="0"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

/// Builds a layout schema with `groups` groups of `fields` fields each.
///
/// Every group repeats the `T_periodo` type, so all groups after the first
/// carry a duplicate item.
#[must_use]
pub fn synthetic_layout(groups: usize, fields: usize) -> String {
    let mut xml = String::from(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="eSocial">
        <xs:annotation><xs:documentation>S-9999 - Evento sintético</xs:documentation></xs:annotation>
        <xs:complexType><xs:sequence>
            <xs:element name="evtSintetico">
                <xs:annotation>
                    <xs:documentation>Evento sintético.</xs:documentation>
                    <xs:documentation>CHAVE_GRUPO: {Id}</xs:documentation>
                </xs:annotation>
                <xs:complexType><xs:sequence>
"#,
    );

    for group in 0..groups {
        xml.push_str(&format!(
            r#"<xs:element name="grupo{group}" minOccurs="0" maxOccurs="unbounded">
    <xs:annotation>
        <xs:documentation>Grupo {group}.</xs:documentation>
        <xs:documentation>CONDICAO_GRUPO: O (se {{campo0}}(./campo0) = [1]); N (demais casos)</xs:documentation>
    </xs:annotation>
    <xs:complexType><xs:sequence>
        <xs:element name="periodo" type="T_periodo"/>
"#
        ));
        for field in 0..fields {
            let type_name = if field % 2 == 0 { "TS_codigo" } else { "TS_valor" };
            xml.push_str(&format!(
                r#"        <xs:element name="campo{field}" type="{type_name}">
            <xs:annotation>
                <xs:documentation>Campo {field}, conforme Tabela 01.</xs:documentation>
                <xs:documentation>Validação: Deve ser compatível com {{iniValid}}(./periodo_iniValid).</xs:documentation>
                <xs:documentation>REGRA:REGRA_CAMPO_{field}</xs:documentation>
            </xs:annotation>
        </xs:element>
"#
            ));
        }
        xml.push_str("    </xs:sequence></xs:complexType>\n</xs:element>\n");
    }

    xml.push_str(
        r#"                </xs:sequence>
                <xs:attribute name="Id" use="required">
                    <xs:simpleType>
                        <xs:restriction base="xs:ID"><xs:length value="36"/></xs:restriction>
                    </xs:simpleType>
                </xs:attribute>
                </xs:complexType>
            </xs:element>
        </xs:sequence></xs:complexType>
    </xs:element>
</xs:schema>"#,
    );
    xml
}
