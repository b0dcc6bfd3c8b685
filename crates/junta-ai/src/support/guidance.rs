use serde::Serialize;

use super::catalog::ResourceKind;

pub const URGENT_MESSAGE: &str = "Se você está em perigo imediato, ligue 190 ou 180";

#[derive(Debug, Clone, Serialize)]
pub struct ResourceKindDescriptor {
    pub tipo: ResourceKind,
    pub nome: &'static str,
    pub descricao: &'static str,
    pub icon: &'static str,
}

impl ResourceKind {
    pub const fn descriptor(self) -> ResourceKindDescriptor {
        let (nome, descricao, icon) = match self {
            Self::Emergency => (
                "Emergência",
                "Linhas telefônicas de atendimento imediato 24h",
                "🚨",
            ),
            Self::Police => (
                "Policial",
                "Delegacias e serviços policiais especializados",
                "👮",
            ),
            Self::Support => (
                "Apoio",
                "Centros de apoio psicológico, social e jurídico",
                "🤝",
            ),
        };
        ResourceKindDescriptor {
            tipo: self,
            nome,
            descricao,
            icon,
        }
    }
}

pub fn kind_descriptors() -> Vec<ResourceKindDescriptor> {
    ResourceKind::ALL
        .into_iter()
        .map(ResourceKind::descriptor)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct SafetyTips {
    pub dicas_gerais: &'static [&'static str],
    pub em_caso_emergencia: &'static [&'static str],
    pub planejamento_saida: &'static [&'static str],
    pub direitos: &'static [&'static str],
}

pub const SAFETY_TIPS: SafetyTips = SafetyTips {
    dicas_gerais: &[
        "Mantenha documentos importantes em lugar seguro (RG, CPF, certidões)",
        "Tenha um plano de saída caso precise sair rapidamente de casa",
        "Confie em amigos ou familiares de confiança sobre sua situação",
        "Registre evidências (fotos de lesões, mensagens ameaçadoras)",
        "Saiba que você pode solicitar medidas protetivas na delegacia",
        "Não se culpe - a violência nunca é culpa da vítima",
    ],
    em_caso_emergencia: &[
        "Se estiver em perigo imediato, ligue 190 (Polícia Militar)",
        "Ligue 180 para orientações e denúncias (Central da Mulher)",
        "Procure um lugar seguro com pessoas que possam te ajudar",
        "Se possível, grave ou fotografe evidências da violência",
        "Não hesite em pedir ajuda - sua segurança é prioridade",
    ],
    planejamento_saida: &[
        "Tenha sempre um telefone carregado",
        "Guarde uma quantia de dinheiro em local seguro",
        "Prepare uma mala com itens essenciais (se possível)",
        "Identifique rotas de saída seguras da residência",
        "Combine sinais de alerta com vizinhos ou amigos de confiança",
        "Conheça os endereços de casas de acolhimento próximas",
    ],
    direitos: &[
        "Você tem direito a medidas protetivas de urgência",
        "Atendimento pela Polícia e Delegacia da Mulher é seu direito",
        "Acompanhamento psicológico e social gratuito está disponível",
        "Acesso à Defensoria Pública gratuita é garantido",
        "Você pode solicitar abrigo em casas de proteção",
    ],
};

/// Summary of Law 11.340/2006 (Lei Maria da Penha).
#[derive(Debug, Clone, Serialize)]
pub struct LawSummary {
    pub titulo: &'static str,
    pub numero: &'static str,
    pub descricao: &'static str,
    pub principais_pontos: &'static [&'static str],
    pub medidas_protetivas: &'static [&'static str],
    pub como_solicitar: &'static str,
    pub link_oficial: &'static str,
}

pub const MARIA_DA_PENHA: LawSummary = LawSummary {
    titulo: "Lei Maria da Penha",
    numero: "Lei 11.340/2006",
    descricao: "Lei brasileira que cria mecanismos para coibir a violência doméstica e familiar contra a mulher",
    principais_pontos: &[
        "Define os tipos de violência: física, psicológica, sexual, patrimonial e moral",
        "Cria mecanismos de proteção à mulher vítima de violência",
        "Estabelece medidas protetivas de urgência",
        "Proíbe a aplicação de penas pecuniárias (cestas básicas) aos agressores",
        "Permite a prisão preventiva do agressor",
        "Garante atendimento especializado e humanizado",
    ],
    medidas_protetivas: &[
        "Afastamento do agressor do lar",
        "Proibição de aproximação da vítima e familiares",
        "Proibição de contato por qualquer meio",
        "Restrição ou suspensão de visitas aos dependentes",
        "Prestação de alimentos provisionais",
    ],
    como_solicitar: "As medidas protetivas podem ser solicitadas na Delegacia da Mulher, Delegacia comum, Defensoria Pública ou diretamente no Juizado.",
    link_oficial: "http://www.planalto.gov.br/ccivil_03/_ato2004-2006/2006/lei/l11340.htm",
};
