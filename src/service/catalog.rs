use crate::models::budget::BudgetService;

/// The standard Arazzo service catalog offered to every new budget. Prices
/// are filled in per event, so every entry starts unselected at zero.
pub fn default_services() -> Vec<BudgetService> {
    vec![
        BudgetService {
            id: "buffet".to_string(),
            name: "Buffet completo".to_string(),
            selected: false,
            unit_value: 0.0,
            description: Some(
                "Serviço de buffet completo incluindo montagem da mesa principal, entradas variadas, \
                 pratos quentes, guarnições, sobremesas e bebidas não alcoólicas. Equipe de garçons e \
                 copeiros inclusa para atendimento durante todo o evento."
                    .to_string(),
            ),
        },
        BudgetService {
            id: "decoracao".to_string(),
            name: "Decoração personalizada".to_string(),
            selected: false,
            unit_value: 0.0,
            description: Some(
                "Projeto de decoração completo, incluindo montagem de mesa principal, arranjos florais, \
                 painel decorativo, iluminação cênica e ambientação personalizada conforme o estilo do \
                 evento."
                    .to_string(),
            ),
        },
        BudgetService {
            id: "equipe".to_string(),
            name: "Equipe de apoio com garçons".to_string(),
            selected: false,
            unit_value: 0.0,
            description: Some(
                "Equipe de apoio composta por garçons, copeiros e auxiliares devidamente uniformizados, \
                 responsáveis pelo atendimento aos convidados, reposição do buffet e organização das \
                 mesas durante o evento."
                    .to_string(),
            ),
        },
        BudgetService {
            id: "iluminacao".to_string(),
            name: "Iluminação e som".to_string(),
            selected: false,
            unit_value: 0.0,
            description: Some(
                "Estrutura completa de iluminação e sonorização, incluindo montagem, operação e \
                 desmontagem. Equipamentos profissionais adequados ao espaço do evento."
                    .to_string(),
            ),
        },
    ]
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn catalog_has_four_services_with_unique_ids() {
        let services = default_services();
        assert_eq!(services.len(), 4);

        let mut ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn catalog_entries_start_unselected_and_free() {
        for service in default_services() {
            assert!(!service.selected);
            assert_eq!(service.unit_value, 0.0);
        }
    }
}
