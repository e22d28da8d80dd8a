//! Layout shared by the rendering tests.

use xsdoc_model::Layout;
use xsdoc_schema::{TypeTable, parse_document};

pub const PROCESS_LAYOUT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="eSocial">
        <xs:annotation>
            <xs:documentation>S-1070 - Tabela de Processos Administrativos/Judiciais</xs:documentation>
        </xs:annotation>
        <xs:complexType>
            <xs:sequence>
                <xs:element name="evtTabProcesso">
                    <xs:annotation>
                        <xs:documentation>Evento Tabela de Processos.</xs:documentation>
                        <xs:documentation>CHAVE_GRUPO: {Id}</xs:documentation>
                    </xs:annotation>
                    <xs:complexType>
                        <xs:sequence>
                            <xs:element name="infoProcesso">
                                <xs:annotation>
                                    <xs:documentation>Informações do processo.</xs:documentation>
                                </xs:annotation>
                                <xs:complexType>
                                    <xs:choice>
                                        <xs:element name="inclusao">
                                            <xs:annotation>
                                                <xs:documentation>Inclusão de novas informações.</xs:documentation>
                                                <xs:documentation>CONDICAO_GRUPO: OC</xs:documentation>
                                            </xs:annotation>
                                            <xs:complexType>
                                                <xs:sequence>
                                                    <xs:element name="ideProcesso" type="T_ideProcesso"/>
                                                </xs:sequence>
                                            </xs:complexType>
                                        </xs:element>
                                        <xs:element name="exclusao" maxOccurs="unbounded">
                                            <xs:annotation>
                                                <xs:documentation>Exclusão de informações.</xs:documentation>
                                            </xs:annotation>
                                            <xs:complexType>
                                                <xs:sequence>
                                                    <xs:element name="ideProcesso" type="T_ideProcesso"/>
                                                </xs:sequence>
                                            </xs:complexType>
                                        </xs:element>
                                    </xs:choice>
                                </xs:complexType>
                            </xs:element>
                        </xs:sequence>
                        <xs:attribute name="Id" use="required">
                            <xs:simpleType>
                                <xs:restriction base="xs:ID">
                                    <xs:length value="36"/>
                                </xs:restriction>
                            </xs:simpleType>
                        </xs:attribute>
                    </xs:complexType>
                </xs:element>
            </xs:sequence>
        </xs:complexType>
    </xs:element>
    <xs:complexType name="T_ideProcesso">
        <xs:sequence>
            <xs:element name="nrProc">
                <xs:annotation>
                    <xs:documentation>Número do processo.</xs:documentation>
                    <xs:documentation>Validação: Deve ser compatível com {dtIni}(./dadosProc_dtIni).</xs:documentation>
                </xs:annotation>
                <xs:simpleType>
                    <xs:restriction base="xs:string">
                        <xs:minLength value="1"/>
                        <xs:maxLength value="21"/>
                    </xs:restriction>
                </xs:simpleType>
            </xs:element>
            <xs:element name="dadosProc" minOccurs="0">
                <xs:annotation>
                    <xs:documentation>Dados do processo.</xs:documentation>
                </xs:annotation>
                <xs:complexType>
                    <xs:sequence>
                        <xs:element name="dtIni" type="xs:date">
                            <xs:annotation>
                                <xs:documentation>Data de início.</xs:documentation>
                            </xs:annotation>
                        </xs:element>
                    </xs:sequence>
                </xs:complexType>
            </xs:element>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

pub fn process_layout() -> Layout {
    let document = parse_document(PROCESS_LAYOUT).expect("Failed to parse layout");
    Layout::build(&document, &TypeTable::new()).expect("Failed to build layout")
}
