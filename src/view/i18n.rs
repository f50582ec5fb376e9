//! Two-locale string table for the confirmation page.
//!
//! Presentation code asks for a [`Msg`] in a [`Locale`]; it never branches on
//! the locale itself.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Resolves a path/locale tag. Anything that is not Arabic falls back to
    /// the default locale.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ar") {
            Locale::Ar
        } else {
            Locale::En
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    fn column(self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Ar => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Home,
    OrderSuccessTitle,
    OrderErrorTitle,
    LoadingOrderDetails,
    SomethingWentWrong,
    ReturnHome,
    OrderPlaced,
    ThankYou,
    OrderDetails,
    OrderIdLabel,
    OrderDateLabel,
    StatusLabel,
    TotalLabel,
    CustomerInformation,
    NameLabel,
    PhoneLabel,
    EmailLabel,
    DeliveryAddressLabel,
    OrderItems,
    QuantityLabel,
    ProductFallback,
    WhatsNext,
    WeWillContact,
    WeWillContactBody,
    FastDelivery,
    FastDeliveryBody,
    ContinueShopping,
    ContactUs,
    SendWhatsApp,
    NewOrder,
    OrderIdNotFound,
    FailedToLoadOrder,
    FailedToLoadOrderDetails,
}

impl Msg {
    const fn entry(self) -> [&'static str; 2] {
        match self {
            Msg::Home => ["Home", "الرئيسية"],
            Msg::OrderSuccessTitle => ["Order Success", "تم الطلب بنجاح"],
            Msg::OrderErrorTitle => ["Order Error", "خطأ في الطلب"],
            Msg::LoadingOrderDetails => ["Loading order details...", "جاري تحميل تفاصيل الطلب..."],
            Msg::SomethingWentWrong => ["Something went wrong", "حدث خطأ"],
            Msg::ReturnHome => ["Return Home", "العودة للرئيسية"],
            Msg::OrderPlaced => ["Order Placed Successfully!", "تم إرسال طلبك بنجاح!"],
            Msg::ThankYou => [
                "Thank you for your order. We'll process it as soon as possible.",
                "شكراً لك على طلبك. سنقوم بمعالجته في أقرب وقت ممكن.",
            ],
            Msg::OrderDetails => ["Order Details", "تفاصيل الطلب"],
            Msg::OrderIdLabel => ["Order ID:", "رقم الطلب:"],
            Msg::OrderDateLabel => ["Order Date:", "تاريخ الطلب:"],
            Msg::StatusLabel => ["Status:", "حالة الطلب:"],
            Msg::TotalLabel => ["Total:", "المجموع:"],
            Msg::CustomerInformation => ["Customer Information", "معلومات العميل"],
            Msg::NameLabel => ["Name:", "الاسم:"],
            Msg::PhoneLabel => ["Phone:", "رقم الهاتف:"],
            Msg::EmailLabel => ["Email:", "البريد الإلكتروني:"],
            Msg::DeliveryAddressLabel => ["Delivery Address:", "عنوان التسليم:"],
            Msg::OrderItems => ["Order Items", "المنتجات المطلوبة"],
            Msg::QuantityLabel => ["Quantity:", "الكمية:"],
            Msg::ProductFallback => ["Product", "منتج"],
            Msg::WhatsNext => ["What's Next?", "ماذا بعد؟"],
            Msg::WeWillContact => ["We'll Contact You", "سنتواصل معك"],
            Msg::WeWillContactBody => [
                "We'll call you to confirm your order and arrange delivery",
                "سنقوم بالاتصال بك لتأكيد الطلب وترتيب التسليم",
            ],
            Msg::FastDelivery => ["Fast Delivery", "التسليم السريع"],
            Msg::FastDeliveryBody => [
                "Your order will be delivered as soon as possible",
                "سيتم توصيل طلبك في أقرب وقت ممكن",
            ],
            Msg::ContinueShopping => ["Continue Shopping", "متابعة التسوق"],
            Msg::ContactUs => ["Contact Us", "اتصل بنا"],
            Msg::SendWhatsApp => ["Send order via WhatsApp", "إرسال الطلب عبر واتساب"],
            Msg::NewOrder => ["New Order", "طلب جديد"],
            Msg::OrderIdNotFound => ["Order ID not found", "لم يتم العثور على رقم الطلب"],
            Msg::FailedToLoadOrder => ["Failed to load order", "فشل تحميل الطلب"],
            Msg::FailedToLoadOrderDetails => [
                "Failed to load order details",
                "فشل تحميل تفاصيل الطلب",
            ],
        }
    }
}

pub fn t(locale: Locale, msg: Msg) -> &'static str {
    msg.entry()[locale.column()]
}
