//! End-to-end rendering of the S-1000 fixture layout.

use std::path::{Path, PathBuf};
use xsdoc::prelude::*;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn employer_layout() -> Layout {
    let document = parse_file(&fixture("evtInfoEmpregador.xsd")).expect("Failed to parse layout");
    let types = std::fs::read_to_string(fixture("tipos.xsd")).expect("Failed to read types");
    let types = parse_type_table(&types).expect("Failed to parse types");
    Layout::build(&document, &types).expect("Failed to build layout")
}

fn item<'a>(layout: &'a Layout, path: &str) -> &'a SchemaItem {
    layout
        .find_by_path(path)
        .unwrap_or_else(|| panic!("no item at {path}"))
}

#[test]
fn test_layout_identity() {
    let layout = employer_layout();
    assert_eq!(layout.code(), "S-1000");
    assert_eq!(layout.short_code(), "1000");
    assert_eq!(layout.name(), "evtInfoEmpregador");
    assert_eq!(
        layout.description(),
        "Informações do Empregador/Contribuinte/Órgão Público"
    );
    assert_eq!(layout.len(), 31);
}

#[test]
fn test_preorder_paths() {
    let layout = employer_layout();
    let paths: Vec<&str> = layout.preorder().take(9).map(|i| i.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "1000_eSocial",
            "1000",
            "1000_Id",
            "1000_ideEmpregador",
            "1000_ideEmpregador_tpInsc",
            "1000_ideEmpregador_nrInsc",
            "1000_infoEmpregador",
            "1000_infoEmpregador_inclusao",
            "1000_infoEmpregador_inclusao_idePeriodo",
        ]
    );

    let numbering: Vec<u32> = layout.preorder().map(|i| i.numbering).collect();
    assert_eq!(numbering, (1..=31).collect::<Vec<u32>>());
}

#[test]
fn test_inferred_columns() {
    let layout = employer_layout();
    let cadastro = "1000_infoEmpregador_inclusao_infoCadastro";

    let id = item(&layout, "1000_Id");
    assert_eq!(id.category, Category::Attribute);
    assert_eq!(id.type_label, TypeLabel::Character);
    assert_eq!(id.size, Some(Size::Fixed(36)));

    let nr_insc = item(&layout, "1000_ideEmpregador_nrInsc");
    assert_eq!(nr_insc.size, Some(Size::List(vec![8, 11, 14])));

    let ini_valid = item(&layout, "1000_infoEmpregador_inclusao_idePeriodo_iniValid");
    assert_eq!(ini_valid.size, Some(Size::List(vec![4, 7])));

    let capital = item(&layout, &format!("{cadastro}_vrCapSocial"));
    assert_eq!(capital.type_label, TypeLabel::Numeric);
    assert_eq!(capital.size, Some(Size::Range(1, 14)));
    assert_eq!(capital.decimal_places.as_deref(), Some("2"));

    let transformation = item(&layout, &format!("{cadastro}_dtTrans11096"));
    assert_eq!(transformation.type_label, TypeLabel::Date);
    assert_eq!(transformation.occurrence.to_string(), "0-1");

    let certificate = item(&layout, &format!("{cadastro}_dadosIsencao_nrCertif"));
    assert_eq!(certificate.size, Some(Size::Range(0, 40)));

    let choice = item(&layout, "1000_infoEmpregador");
    assert_eq!(choice.category, Category::Choice);
    assert_eq!(
        item(&layout, "1000_infoEmpregador_exclusao").occurrence.to_string(),
        "0-1"
    );
}

#[test]
fn test_repeated_types_reference_first_occurrence() {
    let layout = employer_layout();
    let first = item(&layout, "1000_infoEmpregador_inclusao_idePeriodo");
    assert!(!first.is_duplicate());
    assert_eq!(layout.first_occurrence("T_idePeriodo"), Some(first.id));

    for path in [
        "1000_infoEmpregador_alteracao_idePeriodo",
        "1000_infoEmpregador_alteracao_novaValidade",
        "1000_infoEmpregador_exclusao_idePeriodo",
    ] {
        let repeated = item(&layout, path);
        assert!(repeated.is_duplicate(), "{path} should be a duplicate");
        assert_eq!(layout.reference(repeated.id).map(|r| r.id), Some(first.id));
        assert_eq!(repeated.children.len(), 2);
    }

    let nova = item(&layout, "1000_infoEmpregador_alteracao_novaValidade");
    assert_eq!(nova.summary_description(), "Novo período de validade.");
    assert_eq!(first.summary_description(), "Período de validade das informações.");
}

#[test]
fn test_rule_references() {
    let layout = employer_layout();
    let rules = layout.rule_references();

    assert_eq!(
        rules.keys().collect::<Vec<_>>(),
        vec!["REGRA_ENVIO_PROC_FECHAMENTO", "REGRA_VALIDA_EMPREGADOR"]
    );
    assert_eq!(
        rules["REGRA_ENVIO_PROC_FECHAMENTO"],
        vec![RuleReference {
            anchor: "1000".to_string(),
            trail: "evtInfoEmpregador".to_string(),
        }]
    );
    let trails: Vec<&str> = rules["REGRA_VALIDA_EMPREGADOR"]
        .iter()
        .map(|r| r.trail.as_str())
        .collect();
    assert_eq!(
        trails,
        vec![
            "evtInfoEmpregador > infoEmpregador > inclusao > infoCadastro",
            "evtInfoEmpregador > infoEmpregador > inclusao > infoCadastro > dadosIsencao > nrCertif",
        ]
    );
}

#[test]
fn test_summary_html() {
    let layout = employer_layout();
    let resolver = CrossRefResolver::new();
    let html = SummaryHtml::new(&layout, &resolver).generate();

    assert_eq!(html.matches("<td id=\"r_").count(), 13);
    assert!(!html.contains("Ver:"));
    assert!(html.contains(concat!(
        "<td><a href=\"#1000_ideEmpregador_tpInsc\">tpInsc</a>, ",
        "<a href=\"#1000_ideEmpregador_nrInsc\">nrInsc</a></td>\n",
    )));
    assert!(html.contains(concat!(
        "<td>O (se <a href=\"#1000_infoEmpregador_inclusao_infoCadastro_classTrib\">classTrib</a> = [80]);<br />\n",
        "N (nos demais casos)</td>\n",
    )));
    assert!(html.contains("<td>Informações do empregador</td>\n"));
}

#[test]
fn test_complete_html() {
    let layout = employer_layout();
    let resolver = CrossRefResolver::new();
    let html = CompleteHtml::new(&layout, &resolver).generate();

    assert_eq!(html.matches("copiarCaminho").count(), 25);
    assert_eq!(html.matches("<strong>Ver:</strong>").count(), 3);
    assert!(html.contains("id=\"1000_infoEmpregador_exclusao_idePeriodo\">25</td>"));
    assert!(html.contains("<td>C</td>\n<td>1</td>\n<td>8, 11 ou 14</td>\n"));
    assert!(html.contains("<td>C</td>\n<td>1</td>\n<td>4 ou 7</td>\n"));
    assert!(html.contains("<td>N</td>\n<td>1</td>\n<td>1-14</td>\n<td>2</td>\n"));
    assert!(html.contains(
        "<td>Informações de cadastro do empregador, enviadas na inclusão.<br />\n\
         <strong>Regra de validação:</strong><br />\n\
         <a href=\"#REGRA_VALIDA_EMPREGADOR\">REGRA_VALIDA_EMPREGADOR</a></td>\n"
    ));
    assert!(html.contains(concat!(
        "<td>Código de incidência tributária.",
        "<br />\n<strong>Valores válidos:</strong>",
        "<br />\n<strong>00</strong> - Não é base de cálculo",
        "<br />\n<br />\nBase de cálculo das contribuições sociais",
        "<br />\n<strong>11</strong> - Mensal",
        "<br />\n<strong>12</strong> - 13<sup>o</sup> salário</td>\n",
    )));
    assert!(html.contains(concat!(
        "<td>Número de inscrição.<br />\n<strong>Validação:</strong> ",
        "Se <a href=\"#1000_ideEmpregador_tpInsc\">tpInsc</a> = [1], deve ser um CNPJ válido.",
        "<br />\nDeve conter apenas números.</td>\n",
    )));
    assert!(html.contains(
        "Classificação tributária conforme <a href=\"tabelas.html#08\">Tabela 08</a>."
    ));
}

#[test]
fn test_text_views() {
    let layout = employer_layout();
    let config = RenderConfig::new();
    let text = Generator::new(&layout, &config).generate_text();

    assert!(text.starts_with(
        "S-1000 - evtInfoEmpregador\nInformações do Empregador/Contribuinte/Órgão Público\n\n"
    ));
    assert!(text.contains(concat!(
        "Nome: vrCapSocial\n",
        "Pai: infoCadastro\n",
        "Elem.: E\n",
        "Tipo: N\n",
        "Ocorrência: 1\n",
        "Tamanho: 1-14\n",
        "Dec.: 2\n",
        "Descrição: Valor do capital social.\n",
        "Validação: Deve ser maior que zero se classTrib = [03].\n\n",
    )));
    assert!(text.contains("Condição: O (se classTrib = [80])\nN (nos demais casos)\n\n"));
    assert_eq!(text.matches("Ver: inclusao > idePeriodo\n").count(), 3);
    assert!(!text.contains("<a href"));
}

#[test]
fn test_render_from_files() {
    let rendered = render_from_files(&fixture("evtInfoEmpregador.xsd"), &fixture("tipos.xsd"))
        .expect("Failed to render");
    assert_eq!(rendered.code, "S-1000");
    assert!(rendered.html.contains("<h3 id=\"evtInfoEmpregador\""));
    assert!(rendered.text.contains("Nome: nrCertif\n"));
}

#[test]
fn test_missing_global_types() {
    let layout = std::fs::read_to_string(fixture("evtInfoEmpregador.xsd")).expect("read");
    let empty = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"/>"#;
    let err = xsdoc::render_html_from_xml(&layout, empty).expect_err("types are missing");
    assert!(matches!(
        err,
        RenderError::Model(ModelError::TypeNotFound { ref type_name, .. }) if type_name == "TS_Id"
    ));
}

#[test]
fn test_index_and_tree() {
    let layout = employer_layout();
    assert_eq!(
        index_entries(std::slice::from_ref(&layout)),
        "<li><a href=\"#evtInfoEmpregador\">S-1000 - Informações do Empregador/Contribuinte/Órgão Público</a></li>\n"
    );

    let tree = structure_tree(&layout);
    assert!(tree.contains("    ├── Id\n    ├── ideEmpregador\n    |   ├── tpInsc\n"));
    assert!(tree.ends_with("        └── exclusao\n            └── idePeriodo\n                ├── iniValid\n                └── fimValid\n"));
}
