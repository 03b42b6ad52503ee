//! Fixed-content coupons printed alongside the events receipt.

use url::Url;

use crate::receipt::{Align, Emphasis, Receipt};

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Percentage printed on the discount and pickup coupons.
pub const DISCOUNT_PERCENT: u8 = 10;

pub const PICKUP_INFO_LINK: &str = "https://www.rihappy.com.br/retira-em-loja";
pub const CHRISTMAS_CAMPAIGN_LINK: &str =
    "https://checkindigital.rihappy.com.br/evento?codigo=a529d63d-e332-4fde-b6fd-78b8dfcc22c4";

/// The printable coupon layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponKind {
    Events,
    Discount,
    PickupInfo,
    ChristmasLetter,
}

/// URL of the external service image encoding `data` as a QR code.
pub fn qr_code_url(data: &str, size_px: u32) -> Url {
    let size = format!("{size_px}x{size_px}");
    // The service URL is a constant, so parsing cannot fail.
    let mut url = Url::parse(QR_SERVICE).expect("valid QR service URL");
    url.query_pairs_mut()
        .append_pair("size", &size)
        .append_pair("data", data);
    url
}

fn store_or(store_name: &str, placeholder: &'static str) -> String {
    if store_name.is_empty() {
        placeholder.to_string()
    } else {
        store_name.to_uppercase()
    }
}

pub fn discount_coupon(store_name: &str) -> Receipt {
    let mut receipt = Receipt::new();
    receipt
        .heading(store_or(store_name, "NOME DA LOJA"))
        .heading("CUPOM DE DESCONTO")
        .separator()
        .blank()
        .push("VOCÊ GANHOU", Align::Center, Emphasis::Bold)
        .push(format!("{DISCOUNT_PERCENT}%"), Align::Center, Emphasis::Large)
        .push("DE DESCONTO", Align::Center, Emphasis::Bold)
        .blank()
        .separator()
        .center(
            "Válido para a compra de qualquer produto na loja na data da retirada do seu \
             pedido.",
        )
        .blank()
        .separator()
        .heading("USO INTERNO DA LOJA")
        .center("Adicional: [  ] Sim [  ] Não");
    receipt
}

pub fn pickup_info_coupon(brand: &str, store_name: &str) -> Receipt {
    let qr = qr_code_url(PICKUP_INFO_LINK, 100);
    let mut receipt = Receipt::new();
    receipt
        .heading(format!("RETIRA EM LOJA {}", brand.to_uppercase()))
        .center(store_or(store_name, "SUA LOJA"))
        .separator();

    let steps = [
        ("COMPRE NO SITE", format!("OU APP {}", brand.to_uppercase())),
        ("RETIRE NA LOJA", "ESCOLHA SUA LOJA".to_string()),
        ("EM ATÉ 90 MINUTOS", "APÓS CONFIRMAÇÃO".to_string()),
    ];
    for (i, (step, detail)) in steps.into_iter().enumerate() {
        receipt
            .heading(format!("{}. {}", i + 1, step))
            .push(detail, Align::Center, Emphasis::Small);
    }

    receipt
        .separator()
        .push(format!("+ {DISCOUNT_PERCENT}% OFF NO DIA!"), Align::Center, Emphasis::Large)
        .separator()
        .center(format!("[QR] {qr}"))
        .heading("APONTE A CÂMERA E SAIBA MAIS!")
        .separator()
        .push(
            "Consulte disponibilidade por CEP. O prazo de 90min conta a partir da abertura \
             da loja. Aguarde o e-mail \"Pedido Pronto para Retirada\".",
            Align::Left,
            Emphasis::Small,
        );
    receipt
}

const CHRISTMAS_SECTIONS: [(&str, &[&str]); 7] = [
    (
        "1. O QUE É A AÇÃO?",
        &[
            "A campanha permite que crianças escrevam seus pedidos de Natal e depositem \
             suas cartinhas na urna da loja. O objetivo é registrar esses desejos e criar uma \
             comunicação especial com as famílias.",
        ],
    ),
    (
        "2. COMO PARTICIPAR",
        &[
            "1) Retire a cartinha impressa.",
            "2) Preencha com o pedido de Natal.",
            "3) Deposite na urna da loja.",
        ],
    ),
    (
        "3. CADASTRO OBRIGATÓRIO",
        &[
            "Para a participação ser válida, o responsável deve fazer o cadastro digital \
             no momento em que a cartinha é depositada. Isso garante a identificação correta da \
             criança e a organização da ação.",
        ],
    ),
    ("4. COMO REALIZAR O CADASTRO", &[]),
    (
        "5. O QUE PREENCHER",
        &[
            "Serão solicitados dados do responsável, da criança e as informações do pedido. \
             Preencha com atenção.",
        ],
    ),
    (
        "6. REGRAS ESSENCIAIS",
        &[
            "A participação só é confirmada após o cadastro digital. \
             A cartinha na urna sem cadastro não será identificada.",
        ],
    ),
    (
        "7. APÓS O CADASTRO",
        &[
            "Você receberá a confirmação e a loja continuará o contato com conteúdos \
             personalizados.",
        ],
    ),
];

pub fn christmas_letter_coupon(store_name: &str) -> Receipt {
    let qr = qr_code_url(CHRISTMAS_CAMPAIGN_LINK, 80);
    let mut receipt = Receipt::new();
    receipt
        .heading(store_or(store_name, "NOME DA LOJA"))
        .heading("CARTINHA DE NATAL – COMO PARTICIPAR")
        .separator();

    for (heading, paragraphs) in CHRISTMAS_SECTIONS {
        receipt.push(heading, Align::Left, Emphasis::Bold);
        for paragraph in paragraphs {
            receipt.left(*paragraph);
        }
        // Registration is done through the campaign page.
        if heading.starts_with("4.") {
            receipt
                .heading("Aponte a câmera para o QR Code")
                .center(format!("[QR] {qr}"))
                .push(
                    format!("Ou acesse: {CHRISTMAS_CAMPAIGN_LINK}"),
                    Align::Center,
                    Emphasis::Small,
                );
        }
        receipt.blank();
    }

    receipt
        .separator()
        .heading("DÚVIDAS?")
        .center("Procure um colaborador da loja. Estamos à disposição para ajudar.");
    receipt
}
