//! Display strings for the four supported languages.
//!
//! One canonical shape for all languages: `form`, `stats` and `auth`
//! groups, used by CLI output and export headers.

use super::Language;

pub struct Labels {
    pub form: FormLabels,
    pub stats: StatsLabels,
    pub auth: AuthLabels,
}

pub struct FormLabels {
    pub date: &'static str,
    pub event_name: &'static str,
    pub event_location: &'static str,
    pub description: &'static str,
    pub start_time: &'static str,
    pub end_time: &'static str,
    pub break_duration: &'static str,
    pub hourly_rate: &'static str,
    pub total_hours: &'static str,
    pub total_amount: &'static str,
    pub signature: &'static str,
    pub submit: &'static str,
    pub export: &'static str,
}

pub struct StatsLabels {
    pub title: &'static str,
    pub total_hours: &'static str,
    pub total_amount: &'static str,
    pub by_day: &'static str,
}

pub struct AuthLabels {
    pub login: &'static str,
    pub register: &'static str,
    pub logout: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

pub fn labels(lang: Language) -> &'static Labels {
    match lang {
        Language::En => &EN,
        Language::Ru => &RU,
        Language::Uk => &UK,
        Language::Cs => &CS,
    }
}

static EN: Labels = Labels {
    form: FormLabels {
        date: "Date",
        event_name: "Event Name",
        event_location: "Event Location",
        description: "Description",
        start_time: "Start Time",
        end_time: "End Time",
        break_duration: "Break (minutes)",
        hourly_rate: "Hourly Rate",
        total_hours: "Total Hours",
        total_amount: "Total Amount",
        signature: "Signature",
        submit: "Save Work Entry",
        export: "Export",
    },
    stats: StatsLabels {
        title: "Statistics",
        total_hours: "Total Hours",
        total_amount: "Total Amount",
        by_day: "By day",
    },
    auth: AuthLabels {
        login: "Log in",
        register: "Register",
        logout: "Log out",
        email: "Email",
        password: "Password",
        name: "Name",
    },
};

static RU: Labels = Labels {
    form: FormLabels {
        date: "Дата",
        event_name: "Название мероприятия",
        event_location: "Место проведения",
        description: "Описание деятельности",
        start_time: "Время начала",
        end_time: "Время окончания",
        break_duration: "Перерыв (минут)",
        hourly_rate: "Ставка (Крон/час)",
        total_hours: "Всего часов",
        total_amount: "Общая сумма",
        signature: "Подпись",
        submit: "Сохранить",
        export: "Экспорт",
    },
    stats: StatsLabels {
        title: "Статистика",
        total_hours: "Всего часов",
        total_amount: "Общая сумма",
        by_day: "По дням",
    },
    auth: AuthLabels {
        login: "Войти",
        register: "Регистрация",
        logout: "Выйти",
        email: "Эл. почта",
        password: "Пароль",
        name: "Имя",
    },
};

static UK: Labels = Labels {
    form: FormLabels {
        date: "Дата",
        event_name: "Назва заходу",
        event_location: "Місце проведення",
        description: "Опис діяльності",
        start_time: "Час початку",
        end_time: "Час закінчення",
        break_duration: "Перерва (хвилин)",
        hourly_rate: "Ставка (Крон/година)",
        total_hours: "Всього годин",
        total_amount: "Загальна сума",
        signature: "Підпис",
        submit: "Зберегти",
        export: "Експорт",
    },
    stats: StatsLabels {
        title: "Статистика",
        total_hours: "Всього годин",
        total_amount: "Загальна сума",
        by_day: "По днях",
    },
    auth: AuthLabels {
        login: "Увійти",
        register: "Реєстрація",
        logout: "Вийти",
        email: "Ел. пошта",
        password: "Пароль",
        name: "Ім'я",
    },
};

static CS: Labels = Labels {
    form: FormLabels {
        date: "Datum",
        event_name: "Název akce",
        event_location: "Místo konání",
        description: "Popis činnosti",
        start_time: "Čas začátku",
        end_time: "Čas konce",
        break_duration: "Přestávka (minut)",
        hourly_rate: "Sazba (Kč/hod)",
        total_hours: "Celkem hodin",
        total_amount: "Celková částka",
        signature: "Podpis",
        submit: "Uložit",
        export: "Export",
    },
    stats: StatsLabels {
        title: "Statistika",
        total_hours: "Celkem hodin",
        total_amount: "Celková částka",
        by_day: "Po dnech",
    },
    auth: AuthLabels {
        login: "Přihlásit se",
        register: "Registrace",
        logout: "Odhlásit se",
        email: "E-mail",
        password: "Heslo",
        name: "Jméno",
    },
};
