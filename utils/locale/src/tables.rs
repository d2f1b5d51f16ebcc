use crate::{ActionLabels, Labels, Placeholders, RangeLabels};

pub(crate) const EN: Labels = Labels {
    year: "Year",
    month: "Month",
    week: "Week",
    weekday: "Day of Week",
    day_of_month: "Day of Month",
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    range: RangeLabels {
        start: "Start",
        end: "End",
        to: "to",
    },
    actions: ActionLabels {
        clear: "Clear",
        confirm: "Confirm",
        cancel: "Cancel",
        select_all: "Select All",
        deselect_all: "Deselect All",
    },
    placeholders: Placeholders {
        year: "Select a year",
        month: "Select a month",
        week: "Select a week",
        weekday: "Select days",
        day_of_month: "Select dates",
    },
};

pub(crate) const ZH_CN: Labels = Labels {
    year: "年份",
    month: "月份",
    week: "周",
    weekday: "星期",
    day_of_month: "日期",
    weekdays: [
        "星期一",
        "星期二",
        "星期三",
        "星期四",
        "星期五",
        "星期六",
        "星期日",
    ],
    weekdays_short: ["一", "二", "三", "四", "五", "六", "日"],
    months: [
        "一月",
        "二月",
        "三月",
        "四月",
        "五月",
        "六月",
        "七月",
        "八月",
        "九月",
        "十月",
        "十一月",
        "十二月",
    ],
    months_short: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    range: RangeLabels {
        start: "开始",
        end: "结束",
        to: "至",
    },
    actions: ActionLabels {
        clear: "清除",
        confirm: "确认",
        cancel: "取消",
        select_all: "全选",
        deselect_all: "取消全选",
    },
    placeholders: Placeholders {
        year: "请选择年份",
        month: "请选择月份",
        week: "请选择周",
        weekday: "请选择星期",
        day_of_month: "请选择日期",
    },
};
